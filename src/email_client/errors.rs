use custom_error::custom_error;
use lettre::address::AddressError;
use reqwest::Error;
use url::ParseError;

custom_error! {
///! Every way a mail relay can fail to take a message.
pub EmailClientError
    InvalidUri {source:ParseError} = "{source}",
    InvalidRequest {source:Error} = "{source}",
    ErrorResponse {
        code:u16,
        canonical_reason:String
    } = "Relay rejected the message: {canonical_reason} with code: {code}",
    InvalidAddress {source:AddressError} = "Invalid address: {source}",
    InvalidMessage {source:lettre::error::Error} = "Invalid message: {source}",
    SmtpFailure {source:lettre::transport::smtp::Error} = "{source}",
}
