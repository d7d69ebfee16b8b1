use thiserror::Error;

#[derive(Error, Debug)]
pub enum FindError {
    // Configuration errors
    #[error("Must specify tag or instance to search for")]
    MissingSearchTarget,

    #[error("Cannot specify both a tag and an instance to search for")]
    ConflictingSearchTargets,

    // Credential/config load errors
    #[error("failed to load aws config: {0}")]
    NoRegion(String),

    // Remote query errors
    #[error("failed to describe instances: {0}")]
    DescribeInstances(String),

    // Output errors
    #[error("failed to write results: {0}")]
    Output(#[from] std::io::Error),
}

impl FindError {
    /// Wrap a DescribeInstances SDK error with a readable summary.
    pub fn describe<E, R>(err: aws_sdk_ec2::error::SdkError<E, R>) -> Self
    where
        E: std::fmt::Debug,
        R: std::fmt::Debug,
    {
        use aws_sdk_ec2::error::SdkError;

        let detail = match &err {
            SdkError::ServiceError(service_err) => format!("{:?}", service_err.err()),
            SdkError::TimeoutError(_) => "request timed out".to_string(),
            SdkError::DispatchFailure(dispatch) => {
                if dispatch.is_io() {
                    "network error - please check your connection".to_string()
                } else if dispatch.is_timeout() {
                    "connection timed out".to_string()
                } else {
                    format!("connection error: {:?}", dispatch)
                }
            }
            SdkError::ConstructionFailure(_) => "failed to construct request".to_string(),
            SdkError::ResponseError(resp) => format!("response error: {:?}", resp),
            _ => err.to_string(),
        };

        FindError::DescribeInstances(detail)
    }
}

pub type Result<T> = std::result::Result<T, FindError>;
