use aws_lambda_events::event::s3::S3Event;
use aws_weekly_report::slack::SlackWebhook;
use aws_weekly_report::storage::S3Store;
use aws_weekly_report::telemetry::init_tracing;
use aws_weekly_report::{HandlerResponse, NotifierConfig, StorageRecord, UploadNotifier};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use reqwest::Client;
use tracing::{error, info};

struct Clients {
    http: Client,
    s3: aws_sdk_s3::Client,
}

async fn handler(clients: &Clients, event: LambdaEvent<S3Event>) -> Result<HandlerResponse, Error> {
    let config = match NotifierConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return Ok(HandlerResponse::error(e.to_string()));
        }
    };

    let records = StorageRecord::from_event(&event.payload);
    info!(records = records.len(), "received S3 event");

    let chat = SlackWebhook::new(clients.http.clone(), config.webhook_url.clone());
    let notifier = UploadNotifier::new(config, S3Store::new(clients.s3.clone()), chat);

    let response = notifier.handle(&records).await;
    if !response.is_success() {
        error!(status = response.status_code, body = %response.body, "notification run failed");
    }
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let clients = Clients {
        http: Client::new(),
        s3: aws_sdk_s3::Client::new(&aws_config),
    };
    let clients = &clients;

    lambda_runtime::run(service_fn(move |event| async move { handler(clients, event).await })).await
}
