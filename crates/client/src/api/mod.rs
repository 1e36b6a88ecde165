use std::{
    any::type_name,
    error::Error,
    fmt::{Debug, Display},
};

use gloo::net::http::{Method, RequestBuilder, Response};
use http::header::{self, ACCEPT};
use mime::APPLICATION_JSON;
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    api::{
        error::{FrontendError, ResultContext, ServerError, WrongContentTypeError},
        TELEGRAM_INIT_DATA_HEADER,
    },
    model::ValidateModel,
};
use tracing::debug;

use crate::utils::telegram;

mod me;
pub use me::*;

mod habits;
pub use habits::*;

mod completions;
pub use completions::*;

mod invitations;
pub use invitations::*;

mod friends;
pub use friends::*;

mod stats;
pub use stats::*;

mod profile;
pub use profile::*;

mod feed;
pub use feed::*;

mod achievements;
pub use achievements::*;

pub trait ResponseContentType: Sized {
    fn content_type(&self) -> Option<String>;
}

impl ResponseContentType for Response {
    fn content_type(&self) -> Option<String> {
        self.headers().get(header::CONTENT_TYPE.as_str())
    }
}

/// Attaches the host-provided auth material when running inside Telegram
fn with_telegram_auth(builder: RequestBuilder) -> RequestBuilder {
    match telegram::init_data() {
        Some(init_data) => builder.header(TELEGRAM_INIT_DATA_HEADER, &init_data),
        None => builder,
    }
}

/// Perform a json request
///
/// If a body is provided it is validated using ValidateModel before
/// sending; wrap it in NoValidation if that isn't wanted. No retries: a
/// failed request surfaces its error and the user re-triggers the action.
pub async fn json_request<B, R, E>(
    method: Method,
    url: &str,
    body: Option<&B>,
) -> Result<R, FrontendError<ServerError<E>>>
where
    B: Serialize + Debug + ValidateModel,
    R: DeserializeOwned,
    E: Error + DeserializeOwned + Display,
{
    debug!(
        "json_request({method}, {url}, body type: {})",
        type_name::<B>()
    );
    if let Some(body) = body {
        debug!("json_request::body::validate");
        body.validate()?;
    }

    let builder = with_telegram_auth(
        RequestBuilder::new(url)
            .method(method.clone())
            .header(ACCEPT.as_str(), APPLICATION_JSON.essence_str()),
    );

    debug!("json_request::request::build");
    let request = match body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(FrontendError::from)
    .with_context(|| format!("Converting {:?} to json body (for: {method} {url})", body))?;

    debug!("json_request::request::send");
    let response = request
        .send()
        .await
        .map_err(FrontendError::from)
        .with_context(|| format!("Sending {:?} to {method} {url}", body))?;

    // Check the content-type is what we're expecting
    let content_type = response.content_type();
    let is_json = content_type
        .as_ref()
        .map_or(false, |v| v == APPLICATION_JSON.essence_str());
    debug!("json_request::response::is_json: {is_json}");

    // Handle non-json errors (this isn't to allow the api to return other
    // things, it's only to handle errors)
    if !is_json {
        let body = response
            .text()
            .await
            .map_err(FrontendError::from)
            .with_context(|| format!("Extracting response body as text from {method} {url}"))?;

        debug!("json_request::return Err(WrongContentTypeError)");
        Err(WrongContentTypeError {
            expected: APPLICATION_JSON.to_string(),
            got: content_type,
            body,
        })
        .map_err(FrontendError::from)
        .with_context(|| format!("Response from {method} {url}"))?;
    }

    // Deserialize the error type
    if !response.ok() {
        debug!("json_request::return Err(FrontendError)");
        let err = response
            .json::<ServerError<E>>()
            .await
            .map_err(FrontendError::from)
            .with_context(|| {
                format!(
                    "Deserializing error response ({}) from {method} {url}",
                    type_name::<E>()
                )
            })?;

        Err(FrontendError::Inner { inner: err })?;
    }

    // Deserialize the ok type
    debug!("json_request::deserialize");
    let payload = response
        .json::<R>()
        .await
        .map_err(FrontendError::from)
        .with_context(|| {
            format!(
                "Deserializing OK response ({}) from {method} {url}",
                type_name::<E>()
            )
        })?;

    debug!("json_request::return Ok::<{}>", type_name::<R>());
    Ok(payload)
}

/// Perform a request whose success payload doesn't matter (deletes,
/// declines). Still sets the ACCEPT header so errors can be parsed.
pub async fn simple_request<E>(
    method: Method,
    url: &str,
) -> Result<Response, FrontendError<ServerError<E>>>
where
    E: Error + DeserializeOwned + Display,
{
    debug!("simple_request({method}, {url})");
    let request = with_telegram_auth(
        RequestBuilder::new(url)
            .method(method.clone())
            .header(ACCEPT.as_str(), APPLICATION_JSON.essence_str()),
    )
    .build()
    .map_err(FrontendError::from)
    .with_context(|| format!("Building request (for: {method} {url})"))?;

    debug!("simple_request::request::send");
    let response = request
        .send()
        .await
        .map_err(FrontendError::from)
        .with_context(|| format!("Sending to {method} {url}"))?;

    if !response.ok() {
        let content_type = response.content_type();
        let is_json = content_type
            .as_ref()
            .map_or(false, |v| v == APPLICATION_JSON.essence_str());
        debug!("simple_request::response::is_json: {is_json}");

        if !is_json {
            let body = response
                .text()
                .await
                .map_err(FrontendError::from)
                .with_context(|| {
                    format!("Extracting response body as text from {method} {url}")
                })?;

            debug!("simple_request::return Err(WrongContentTypeError)");
            Err(WrongContentTypeError {
                expected: APPLICATION_JSON.to_string(),
                got: content_type,
                body,
            })
            .map_err(FrontendError::from)
            .with_context(|| format!("Response from {method} {url}"))?;
        }

        debug!("simple_request::return Err(FrontendError)");
        let err = response
            .json::<ServerError<E>>()
            .await
            .map_err(FrontendError::from)
            .with_context(|| {
                format!(
                    "Deserializing error response ({}) from {method} {url}",
                    type_name::<E>()
                )
            })?;

        Err(FrontendError::Inner { inner: err })?;
    }

    debug!("simple_request::return Ok::<Response>");
    Ok(response)
}
