//! Slack payloads for the upload notifier.

use percent_encoding::percent_decode_str;
use serde_json::{json, Value};

use crate::storage::ObjectSummary;
use crate::week::jst;

const NOT_AVAILABLE: &str = "N/A";
const IMAGE_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".gif"];
const LAST_MODIFIED_FORMAT: &str = "%Y年%m月%d日 %H:%M:%S JST";

/// Decode an S3 event key: `+` is a space, then percent escapes.
pub fn decode_object_key(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

pub fn file_name(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

pub fn is_image(key: &str) -> bool {
    let lower = key.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

fn size_text(summary: &ObjectSummary) -> String {
    summary
        .size_bytes
        .map(|size| size.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn last_modified_text(summary: &ObjectSummary) -> String {
    summary
        .last_modified
        .map(|t| t.with_timezone(&jst()).format(LAST_MODIFIED_FORMAT).to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Plain message used when no download link could be issued.
pub fn link_unavailable_message(bucket: &str, key: &str) -> Value {
    json!({
        "text": format!(
            "S3バケット '{bucket}' の '{key}' に新しいオブジェクトが作成されましたが、ダウンロードリンクの生成に失敗しました。"
        )
    })
}

pub fn upload_message(
    bucket: &str,
    key: &str,
    summary: &ObjectSummary,
    download_url: &str,
    expiration_hours: u64,
) -> Value {
    let name = file_name(key);

    let mut blocks = vec![json!({
        "type": "section",
        "text": {
            "type": "mrkdwn",
            "text": format!(
                "新しいレポートがアップロードされました！\n\
                 *ファイル名:* `{name}`\n\
                 *パス:* `s3://{bucket}/{key}`\n\
                 *サイズ:* `{} bytes`\n\
                 *最終更新日時:* `{}`",
                size_text(summary),
                last_modified_text(summary),
            )
        }
    })];

    if is_image(key) {
        blocks.push(json!({
            "type": "image",
            "title": { "type": "plain_text", "text": name },
            "image_url": download_url,
            "alt_text": format!("Preview of {name}")
        }));
    }

    blocks.push(json!({
        "type": "actions",
        "elements": [{
            "type": "button",
            "text": { "type": "plain_text", "text": "ファイルをダウンロード 📥", "emoji": true },
            "url": download_url,
            "style": "primary"
        }]
    }));

    blocks.push(json!({
        "type": "context",
        "elements": [{
            "type": "mrkdwn",
            "text": format!("このダウンロードリンクは {expiration_hours} 時間有効です。")
        }]
    }));

    json!({ "blocks": blocks })
}

/// Fallback sent when processing an event failed outright.
pub fn error_message(error: &str) -> Value {
    json!({ "text": format!("S3イベント処理中にエラーが発生しました: {error}") })
}
