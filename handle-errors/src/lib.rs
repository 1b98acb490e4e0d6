use serde::{Deserialize, Serialize};
use tracing::{Level, event, instrument};
use warp::{
    Rejection, Reply,
    filters::{body::BodyDeserializeError, cors::CorsForbidden},
    http::StatusCode,
    reject::Reject,
};

#[derive(Debug)]
pub enum Error {
    ParseError(std::num::ParseIntError),
    MissingParameters,
    ResourceNotFound,
    QuestionNotFound(i32),
    DatabaseQueryError(sqlx::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &*self {
            Error::ParseError(err) => {
                write!(f, "Cannot parse parameter: {}", err)
            }
            Error::MissingParameters => {
                write!(f, "Missing parameters")
            }
            Error::ResourceNotFound => {
                write!(f, "Resource not found")
            }
            Error::QuestionNotFound(id) => {
                write!(f, "Question {} not found", id)
            }
            Error::DatabaseQueryError(_) => {
                write!(f, "Query could not be executed")
            }
        }
    }
}

impl Reject for Error {}

/// Wire shape shared by every error the API returns.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ErrorResponse {
    success: bool,
    error: u16,
    message: String,
}

fn error_reply(status: StatusCode, message: &str) -> warp::reply::WithStatus<warp::reply::Json> {
    let body = ErrorResponse {
        success: false,
        error: status.as_u16(),
        message: message.to_string(),
    };

    warp::reply::with_status(warp::reply::json(&body), status)
}

fn not_found() -> warp::reply::WithStatus<warp::reply::Json> {
    error_reply(StatusCode::NOT_FOUND, "resource not found")
}

fn unprocessable() -> warp::reply::WithStatus<warp::reply::Json> {
    error_reply(StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable")
}

#[instrument]
pub async fn return_error(r: Rejection) -> Result<impl Reply, Rejection> {
    if let Some(Error::ResourceNotFound) = r.find() {
        event!(Level::WARN, "requested resource was not found");
        Ok(not_found())
    } else if let Some(Error::QuestionNotFound(id)) = r.find() {
        event!(Level::WARN, "question {} does not exist", id);
        Ok(unprocessable())
    } else if let Some(Error::DatabaseQueryError(e)) = r.find() {
        event!(Level::ERROR, "database query error: {:?}", e);
        Ok(unprocessable())
    } else if let Some(error) = r.find::<CorsForbidden>() {
        event!(Level::ERROR, "CORS forbidden error: {}", error);
        Ok(error_reply(StatusCode::FORBIDDEN, &error.to_string()))
    } else if let Some(error) = r.find::<BodyDeserializeError>() {
        event!(Level::ERROR, "cannot deserialize request body: {}", error);
        Ok(unprocessable())
    } else if let Some(error) = r.find::<Error>() {
        event!(Level::ERROR, "{}", error);
        Ok(unprocessable())
    } else {
        event!(Level::WARN, "requested route was not found");
        Ok(not_found())
    }
}
