use actix_web::HttpResponse;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("pool doesn't exist")]
    PoolDoesNotExist,
}

impl From<Error> for HttpResponse {
    fn from(value: Error) -> Self {
        match value {
            Error::PoolDoesNotExist => HttpResponse::NotFound().finish(),
        }
    }
}
