use base64::{
    alphabet,
    engine::{general_purpose, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    DecodeError, Engine as _,
};

/// Feeds are inconsistent about padding, so both decoders accept it either way.
const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// Encodes a string to Base64 format.
pub fn base64_encode(input: &str) -> String {
    general_purpose::STANDARD.encode(input)
}

/// Encodes a string to URL-safe Base64 format without padding.
pub fn url_safe_base64_encode(input: &str) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(input)
}

/// Strict decode: URL-safe alphabet first, then the standard one.
///
/// Returns the error of the standard-alphabet attempt when both fail.
pub fn try_decode(input: &str) -> Result<String, DecodeError> {
    let bytes = match URL_SAFE_LENIENT.decode(input) {
        Ok(bytes) => bytes,
        Err(_) => STANDARD_LENIENT.decode(input)?,
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Decodes a Base64 payload of unknown flavour.
///
/// # Arguments
/// * `input` - Text that may or may not be Base64 encoded.
///
/// # Returns
/// The decoded text, or the input unchanged when neither alphabet accepts it.
pub fn decode_tolerant(input: &str) -> String {
    try_decode(input).unwrap_or_else(|_| input.to_string())
}
