//! AWS Lambda HTTP endpoint for projections
//!
//! POST a JSON body with `principal` and either `weeklyRatePercent` or
//! `plans`; see `compounding_engine::api` for the response shapes.

use compounding_engine::api::respond;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use log::info;

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let body: &[u8] = event.body();
    let (status, value) = respond(body);
    info!("Projection request answered with status {}", status);

    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(value.to_string()))
        .map_err(Box::new)?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
