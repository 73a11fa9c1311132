use std::future::Future;

use aws_sdk_translate::error::DisplayErrorContext;
use aws_sdk_translate::Client;

use crate::TranslateError;

pub const SOURCE_LANGUAGE: &str = "en";
pub const TARGET_LANGUAGE: &str = "ja";

pub trait Translator {
    fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> impl Future<Output = Result<String, TranslateError>> + Send;
}

/// Amazon Translate.
pub struct AwsTranslator {
    client: Client,
}

impl AwsTranslator {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Translator for AwsTranslator {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, TranslateError> {
        let output = self
            .client
            .translate_text()
            .text(text)
            .source_language_code(source)
            .target_language_code(target)
            .send()
            .await
            .map_err(|e| TranslateError::Api(DisplayErrorContext(&e).to_string()))?;

        Ok(output.translated_text().to_string())
    }
}
