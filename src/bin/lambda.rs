//! HTTP handler: POST a JSON scenario, receive the JSON report
//!
//! Missing fields take the form defaults and an empty body is the default
//! scenario. Non-UTF-8 bodies, malformed JSON, unknown risk categories and
//! out-of-range values answer 400.

use finance_projector::{project, report::Report, ProjectionInput};
use lambda_http::{run, service_fn, Body, Request, Response};
use lambda_runtime::Error;
use log::{info, warn};

fn json_response(status: u16, body: String) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?;
    Ok(response)
}

fn error_response(status: u16, message: String) -> Result<Response<Body>, Error> {
    let body = serde_json::json!({ "error": message }).to_string();
    json_response(status, body)
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let body = match std::str::from_utf8(event.body().as_ref()) {
        Ok(text) if text.trim().is_empty() => "{}",
        Ok(text) => text,
        Err(e) => {
            warn!("Rejected request: body is not UTF-8");
            return error_response(400, format!("request body is not valid UTF-8: {}", e));
        }
    };

    let input = match ProjectionInput::from_json(body) {
        Ok(input) => input,
        Err(e) => {
            warn!("Rejected request: {}", e);
            return error_response(400, e.to_string());
        }
    };
    if let Err(e) = input.validate() {
        warn!("Rejected request: {}", e);
        return error_response(400, e.to_string());
    }

    let result = project(&input);
    info!(
        "Projected {} over {} years: final balance {:.2}",
        result.risk_category, result.horizon_years, result.final_balance
    );

    json_response(200, Report::new(&result).to_json()?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
