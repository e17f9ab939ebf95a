#[macro_use]
extern crate log;

use actix_web::{
    error::{BlockingError, ResponseError},
    http::StatusCode,
    HttpResponse,
};
use derive_more::Display;
use diesel::result::{DatabaseErrorKind, Error as DBError};
use r2d2::Error as PoolError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, PartialEq)]
pub enum Error {
    BadRequest(String),
    InternalServerError(String),
    NotFound(String),
    PoolError(String),
    UnprocessableEntity(String),
    UrlGenerationError(String),
    #[display(fmt = "")]
    ValidationError(Vec<String>),
    BlockingError(String),
}

// User-friendly error messages
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub errors: Vec<String>,
}

impl ResponseError for Error {
    fn error_response(&self) -> HttpResponse {
        match self {
            Error::ValidationError(ref validation_errors) => {
                HttpResponse::UnprocessableEntity()
                    .json(ErrorResponse::from(validation_errors.to_vec()))
            }
            Error::UnprocessableEntity(message) => {
                HttpResponse::UnprocessableEntity().json(ErrorResponse::from(message))
            }
            Error::BadRequest(error) => {
                HttpResponse::BadRequest().json(ErrorResponse::from(error))
            }
            Error::NotFound(message) => {
                HttpResponse::NotFound().json(ErrorResponse::from(message))
            }
            _ => HttpResponse::new(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl From<&String> for ErrorResponse {
    fn from(error: &String) -> Self {
        ErrorResponse {
            errors: vec![error.into()],
        }
    }
}

impl From<&str> for ErrorResponse {
    fn from(error: &str) -> Self {
        ErrorResponse {
            errors: vec![error.into()],
        }
    }
}

impl From<Vec<String>> for ErrorResponse {
    fn from(error: Vec<String>) -> Self {
        ErrorResponse { errors: error }
    }
}

// Convert DBErrors to our Error type
impl From<DBError> for Error {
    fn from(error: DBError) -> Error {
        match error {
            DBError::DatabaseError(kind, info) => {
                let message = info.details().unwrap_or_else(|| info.message()).to_string();
                match kind {
                    DatabaseErrorKind::UniqueViolation => Error::BadRequest(message),
                    // a question without its owner, or an answer without its question
                    DatabaseErrorKind::ForeignKeyViolation => Error::UnprocessableEntity(message),
                    _ => {
                        error!("Database error - {}", message);
                        Error::InternalServerError("Unknown database error".into())
                    }
                }
            }
            DBError::NotFound => Error::NotFound("Record not found".into()),
            err => {
                error!("Database error - {}", err);
                Error::InternalServerError("Unknown database error".into())
            }
        }
    }
}

// Convert PoolError to our Error type
impl From<PoolError> for Error {
    fn from(error: PoolError) -> Error {
        Error::PoolError(error.to_string())
    }
}

impl From<BlockingError> for Error {
    fn from(_: BlockingError) -> Error {
        Error::BlockingError("Thread blocking error".into())
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{body::to_bytes, ResponseError};
    use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DBError};

    use super::{Error, ErrorResponse};

    struct Info {
        message: &'static str,
        details: Option<&'static str>,
    }

    impl DatabaseErrorInformation for Info {
        fn message(&self) -> &str {
            self.message
        }

        fn details(&self) -> Option<&str> {
            self.details
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            None
        }

        fn column_name(&self) -> Option<&str> {
            None
        }

        fn constraint_name(&self) -> Option<&str> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind, details: Option<&'static str>) -> DBError {
        DBError::DatabaseError(
            kind,
            Box::new(Info {
                message: "violation",
                details,
            }),
        )
    }

    #[test]
    fn missing_rows_are_not_found() {
        assert_eq!(
            Error::from(DBError::NotFound),
            Error::NotFound("Record not found".to_string())
        );
    }

    #[test]
    fn missing_owner_is_unprocessable() {
        let err = Error::from(database_error(
            DatabaseErrorKind::ForeignKeyViolation,
            Some("Key (user_id)=(99) is not present in table \"users\"."),
        ));

        assert_eq!(
            err,
            Error::UnprocessableEntity(
                "Key (user_id)=(99) is not present in table \"users\".".to_string()
            )
        );
    }

    #[test]
    fn unique_violation_falls_back_to_message() {
        let err = Error::from(database_error(DatabaseErrorKind::UniqueViolation, None));
        assert_eq!(err, Error::BadRequest("violation".to_string()));
    }

    #[test]
    fn unknown_database_errors_hide_details() {
        let err = Error::from(database_error(
            DatabaseErrorKind::UnableToSendCommand,
            Some("connection lost"),
        ));
        assert_eq!(
            err,
            Error::InternalServerError("Unknown database error".to_string())
        );
    }

    #[actix_rt::test]
    async fn validation_errors_render_as_422() {
        let err = Error::ValidationError(vec![
            "title is required".to_string(),
            "body is required".to_string(),
        ]);
        let res = err.error_response();
        assert_eq!(res.status().as_u16(), 422);

        let body = to_bytes(res.into_body()).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.errors.len(), 2);
        assert_eq!(body.errors[0], "title is required");
    }

    #[actix_rt::test]
    async fn single_messages_render_as_error_lists() {
        let missing = "Key (user_id)=(9) is not present in table \"users\".";
        let cases = vec![
            (Error::NotFound("Record not found".into()), 404, "Record not found"),
            (Error::BadRequest("email taken".into()), 400, "email taken"),
            (Error::UnprocessableEntity(missing.into()), 422, missing),
        ];

        for (err, status, message) in cases {
            let res = err.error_response();
            assert_eq!(res.status().as_u16(), status);

            let body = to_bytes(res.into_body()).await.unwrap();
            let body: ErrorResponse = serde_json::from_slice(&body).unwrap();
            assert_eq!(body.errors, vec![message.to_string()]);
        }
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            Error::NotFound("gone".into()).error_response().status().as_u16(),
            404
        );
        assert_eq!(
            Error::BadRequest("bad".into()).error_response().status().as_u16(),
            400
        );
        assert_eq!(
            Error::UrlGenerationError("no slug".into())
                .error_response()
                .status()
                .as_u16(),
            500
        );
    }
}
