use aws_weekly_report::feed::RssFeed;
use aws_weekly_report::storage::S3Store;
use aws_weekly_report::telemetry::init_tracing;
use aws_weekly_report::translate::AwsTranslator;
use aws_weekly_report::{GeneratorConfig, HandlerResponse, ReportGenerator};
use chrono::Utc;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use reqwest::Client;
use serde_json::Value;
use tracing::error;

struct Clients {
    http: Client,
    s3: aws_sdk_s3::Client,
    translate: aws_sdk_translate::Client,
}

async fn handler(clients: &Clients, _event: LambdaEvent<Value>) -> Result<HandlerResponse, Error> {
    let config = match GeneratorConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return Ok(HandlerResponse::error(e.to_string()));
        }
    };

    let generator = ReportGenerator::new(
        config,
        RssFeed::new(clients.http.clone()),
        AwsTranslator::new(clients.translate.clone()),
        S3Store::new(clients.s3.clone()),
    );

    let response = generator.run(&Utc::now()).await;
    if !response.is_success() {
        error!(status = response.status_code, body = %response.body, "report run failed");
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
        translate: aws_sdk_translate::Client::new(&aws_config),
    };
    let clients = &clients;

    lambda_runtime::run(service_fn(move |event| async move { handler(clients, event).await })).await
}
