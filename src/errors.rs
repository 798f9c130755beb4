use failure::Fail;

#[derive(Debug, Fail)]
pub enum OrchestrationError {
    #[fail(display = "Unable to read settings file '{}'", _0)]
    SettingsLoad(String),
    #[fail(display = "{} value is empty or whitespace", _0)]
    MissingSetting(&'static str),
    #[fail(display = "'{}' is not a valid orchestration endpoint key", _0)]
    InvalidEndpointKey(String),
    #[fail(display = "'{}' is not a valid orchestration endpoint", _0)]
    InvalidEndpoint(String),
    #[fail(display = "Orchestration recognizer is not configured")]
    NotConfigured,
}

pub type Result<T> = ::std::result::Result<T, ::failure::Error>;
