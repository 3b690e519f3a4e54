// Mock S3 client used by the unit tests
use aws_sdk_s3::client::Client as S3Client;
use aws_sdk_s3::config::Config as S3Config;
use aws_sdk_s3::config::Credentials;
use aws_smithy_client::erase::DynConnector;
use aws_smithy_client::test_connection::TestConnection;
use aws_smithy_http::body::SdkBody;
use crate::common::Region;
use std::fs;
use std::path::Path;
use super::client::Client;

/// A canned HTTP response for the mock connection.
pub enum ResponseType<'a> {
    /// A 200 whose body is read from the named file under `test-data`.
    FromFile(&'a str),

    /// A 200 with the given literal body.
    WithBody(&'a str),

    /// An empty response with the given status code.
    WithStatus(u16),
}

/// Create a mock S3 `Client` that replays the given responses in order.
pub fn mock_client(responses: Vec<ResponseType>) -> Client {
    let events = responses
        .iter()
        .map(|r| {
            let response = match r {
                ResponseType::FromFile(file) => {
                    let path = Path::new("test-data").join(file);
                    let data = fs::read_to_string(path).unwrap();

                    http::Response::builder()
                        .status(200)
                        .body(SdkBody::from(data))
                        .unwrap()
                },
                ResponseType::WithBody(body) => {
                    http::Response::builder()
                        .status(200)
                        .body(SdkBody::from(*body))
                        .unwrap()
                },
                ResponseType::WithStatus(status) => {
                    http::Response::builder()
                        .status(*status)
                        .body(SdkBody::from(""))
                        .unwrap()
                },
            };

            (
                http::Request::builder()
                    .body(SdkBody::from("request body"))
                    .unwrap(),

                response,
            )
        })
        .collect();

    let conn = TestConnection::new(events);
    let conn = DynConnector::new(conn);

    let creds = Credentials::from_keys(
        "ATESTCLIENT",
        "atestsecretkey",
        Some("atestsessiontoken".to_string()),
    );

    let conf = S3Config::builder()
        .credentials_provider(creds)
        .http_connector(conn)
        .region(aws_sdk_s3::config::Region::new("eu-west-1"))
        .build();

    let client = S3Client::from_conf(conf);

    Client {
        client: client,
        region: Region::default().set_region("eu-west-1"),
    }
}
