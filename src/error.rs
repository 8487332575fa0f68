use std::fmt;


#[macro_export]
macro_rules! internal_error_message {
    () => {
        format!("Internal error at {}:{}.", file!(), line!())
    };
    ($($arg:tt)+) => {
        format!("Internal error at {}:{}: {}.", file!(), line!(), format!($($arg)*))
    };
}

// Everything that can go wrong between receiving a compressed game and showing it.
//
// Decoding only ever produces the first three variants. `InvalidRecord` comes from
// `ReplayController::new` and means a bug somewhere upstream rather than bad input.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ReplayError {
    // The decoding capability could not be initialized or could not be reached.
    // Nothing can be decoded in this session.
    ServiceUnavailable(String),

    // The decoding service understood the request but refused the input.
    // The string is the message supplied by the service.
    ServiceRejected(String),

    // The service response does not follow the envelope/payload contract.
    MalformedPayload(String),

    // Attempt to replay a record without positions.
    InvalidRecord,
}

impl ReplayError {
    // Fatal errors leave the session without a working decoder, so they deserve a blocking
    // notice rather than a message in the log panel.
    pub fn is_fatal(&self) -> bool { matches!(self, ReplayError::ServiceUnavailable(_)) }
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::ServiceUnavailable(msg) => {
                write!(f, "Decoding service unavailable: {msg}")
            }
            ReplayError::ServiceRejected(msg) => write!(f, "{msg}"),
            ReplayError::MalformedPayload(msg) => {
                write!(f, "Malformed decoding service response: {msg}")
            }
            ReplayError::InvalidRecord => write!(f, "Cannot replay a game without positions"),
        }
    }
}

impl std::error::Error for ReplayError {}
