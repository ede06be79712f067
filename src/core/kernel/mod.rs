/// Transport kernel shared by every remote procedure
///
/// ## Request parameters
/// - `RequestParams`: ordered name/value mapping built fresh per call
/// - `generate_nonce` / `unix_timestamp`: per-request replay protection
///
/// ## Authentication
/// - `Signer`: pluggable request-signing interface
/// - `Sha1Signer`: canonical-string SHA-1 signing keyed by the private API key
///
/// ## Transport
/// - `RestClient`: one GET or POST in, one classified `CallOutcome` out
/// - `ReqwestRest`: reqwest-backed implementation
///
/// # Example
/// ```rust,no_run
/// use teamcowboy::core::kernel::*;
///
/// # async fn example() -> Result<(), teamcowboy::TeamCowboyError> {
/// let rest = RestClientBuilder::new(RestClientConfig::new(
///     "https://api.teamcowboy.com/v1/".to_string(),
/// ))
/// .build()?;
/// let signer = Sha1Signer::new("private_key".to_string());
///
/// let mut params = RequestParams::new()
///     .with(API_KEY, "public_key")
///     .with(METHOD_KEY, "Test_GetRequest")
///     .with(TIMESTAMP_KEY, unix_timestamp()?)
///     .with(NONCE_KEY, generate_nonce()?)
///     .with("testParam", "hello");
/// signer.sign_request(RequestKind::Get, "Test_GetRequest", &mut params)?;
///
/// match rest.get("", &params).await? {
///     CallOutcome::Success(payload) => println!("{}", payload),
///     CallOutcome::ClientError(err) => println!("rejected: {}", err),
/// }
/// # Ok(())
/// # }
/// ```
pub mod envelope;
pub mod params;
pub mod rest;
pub mod signer;

pub use envelope::{classify_response, ApiError, CallOutcome};
pub use params::{
    generate_nonce, unix_timestamp, ParamValue, RequestParams, API_KEY, DATE_TIME_FORMAT,
    METHOD_KEY, NONCE_KEY, RESPONSE_TYPE_KEY, SIGNATURE_KEY, TIMESTAMP_KEY, USER_TOKEN_KEY,
};
pub use rest::{ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
pub use signer::{canonical_string, compute_signature, RequestKind, Sha1Signer, Signer};
