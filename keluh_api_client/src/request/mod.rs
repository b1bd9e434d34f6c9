use delete::DeleteRequestBuilder;
use get::GetRequestBuilder;
use post::PostRequestBuilder;
use put::PutRequestBuilder;
use url::Url;

use crate::{clients::HttpClient, server::ApiServer};

pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod post;
pub(crate) mod put;


/// Builder state: no endpoint has been set yet, so the request can't be sent.
pub(crate) struct NoUrl;

/// Builder state: the endpoint has been set (URL parsing errors are reported on send).
pub(crate) type PreparedUrl = Result<Url, url::ParseError>;

/// Builder state of an optional JSON body (serialization errors are reported on send).
pub(crate) type PreparedBody = Option<Result<Vec<u8>, serde_json::Error>>;


pub(crate) struct RequestBuilder;

impl RequestBuilder {
    pub(crate) fn get<HC>(client: &HC) -> GetRequestBuilder<'_, HC, NoUrl>
    where
        HC: HttpClient,
    {
        GetRequestBuilder::new(client)
    }

    pub(crate) fn post<HC>(client: &HC) -> PostRequestBuilder<'_, HC, NoUrl>
    where
        HC: HttpClient,
    {
        PostRequestBuilder::new(client)
    }

    pub(crate) fn put<HC>(client: &HC) -> PutRequestBuilder<'_, HC, NoUrl>
    where
        HC: HttpClient,
    {
        PutRequestBuilder::new(client)
    }

    pub(crate) fn delete<HC>(client: &HC) -> DeleteRequestBuilder<'_, HC, NoUrl>
    where
        HC: HttpClient,
    {
        DeleteRequestBuilder::new(client)
    }
}


fn build_request_url(server: &ApiServer, endpoint: &str) -> Result<Url, url::ParseError> {
    if !endpoint.starts_with('/') {
        Url::parse(&format!("{}/{}", server.base_url(), endpoint))
    } else {
        Url::parse(&format!("{}{}", server.base_url(), endpoint))
    }
}

fn unpack_body(body: PreparedBody) -> Result<Option<Vec<u8>>, crate::ClientError> {
    match body {
        Some(body_data_encoding_result) => match body_data_encoding_result {
            Ok(body_data) => Ok(Some(body_data)),
            Err(error) => Err(crate::ClientError::RequestBodySerializationError { error }),
        },
        None => Ok(None),
    }
}
