//! Encoding, parsing, and validation of Solana Pay URLs.
//!
//! The wire format this module owns:
//!
//! ```text
//! solana:<recipient-or-https-link>[?<query>]
//! query  := pair ('&' pair)*
//! pair   := key '=' value          ; value percent-encoded per RFC 3986
//! keys   := amount | spl-token | reference (repeatable)
//!         | label | message | memo
//! ```
//!
//! The scheme literal is `solana:` — case-sensitive, colon included, no
//! `//`. A remainder that begins with an https link (raw or
//! component-encoded) is a transaction request; anything else is an
//! address-plus-query transfer request.
//!
//! # Key Operations
//!
//! - [`encode_url`] / [`encode_transfer_url`] / [`encode_transaction_url`] -
//!   produce a canonical URL from a typed request
//! - [`parse_url`] - classify and fully decode a URL, or fail
//! - [`validate_url`] - boolean validity, never panics
//! - [`reference_keys`] - project out the reference list
//! - [`qr_payload`] - validate-then-encode for QR embedding

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use url::form_urlencoded;

use crate::address::Address;
use crate::amount::Amount;
use crate::error::SolanaPayError;
use crate::request::{PaymentRequest, TransactionRequest, TransferRequest};

/// Scheme prefix of every Solana Pay URL.
pub const SOLANA_SCHEME: &str = "solana:";

/// Secure-transport prefix that marks a transaction request.
const HTTPS_PREFIX: &str = "https://";

/// Component-encoded form of [`HTTPS_PREFIX`], as the encoder emits it.
const HTTPS_PREFIX_ENCODED: &str = "https%3A";

/// Characters escaped when a transaction link is embedded as a single
/// opaque component after the scheme.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Characters escaped when a whole URL becomes one QR payload. URI
/// structure characters stay intact so scanners still see a URL.
const QR_PAYLOAD: &AsciiSet = &COMPONENT
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'#');

/// Options controlling URL encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Percent-encode the output (the default). When `false` the URL is
    /// rendered in human-readable form — percent-escapes decoded, `+`
    /// turned back into spaces — for display and debugging only; that
    /// form is not guaranteed to round-trip through [`parse_url`].
    pub encode: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self { encode: true }
    }
}

/// Encodes a payment request as a Solana Pay URL.
#[must_use]
pub fn encode_url(request: &PaymentRequest, options: EncodeOptions) -> String {
    match request {
        PaymentRequest::Transfer(transfer) => encode_transfer_url(transfer, options),
        PaymentRequest::Transaction(transaction) => encode_transaction_url(transaction, options),
    }
}

/// Encodes a transfer request as a Solana Pay URL.
///
/// The recipient follows the scheme directly and is never percent-encoded
/// (base58 stays within the unreserved alphabet). Query parameters appear
/// in a fixed order — `amount`, `spl-token`, `reference` (repeated, in
/// input order), `label`, `message`, `memo` — so encoded fixtures are
/// stable. The amount renders as its literal decimal form, scale
/// preserved.
#[must_use]
pub fn encode_transfer_url(request: &TransferRequest, options: EncodeOptions) -> String {
    let mut url = format!("{SOLANA_SCHEME}{}", request.recipient);

    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(amount) = &request.amount {
        query.append_pair("amount", &amount.to_string());
    }
    if let Some(mint) = &request.spl_token {
        query.append_pair("spl-token", &mint.to_string());
    }
    for reference in &request.reference {
        query.append_pair("reference", &reference.to_string());
    }
    if let Some(label) = &request.label {
        query.append_pair("label", label);
    }
    if let Some(message) = &request.message {
        query.append_pair("message", message);
    }
    if let Some(memo) = &request.memo {
        query.append_pair("memo", memo);
    }

    let query = query.finish();
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }

    if options.encode { url } else { display_form(&url) }
}

/// Encodes a transaction request as a Solana Pay URL.
///
/// The link was https-checked at construction; here it is embedded after
/// the scheme as a single opaque component.
#[must_use]
pub fn encode_transaction_url(request: &TransactionRequest, options: EncodeOptions) -> String {
    let link = request.link().as_str();
    if options.encode {
        format!("{SOLANA_SCHEME}{}", utf8_percent_encode(link, COMPONENT))
    } else {
        format!("{SOLANA_SCHEME}{link}")
    }
}

/// Renders an encoded URL in human-readable form.
fn display_form(encoded: &str) -> String {
    percent_decode_str(encoded)
        .decode_utf8_lossy()
        .replace('+', " ")
}

/// Parses a Solana Pay URL into a typed [`PaymentRequest`].
///
/// Parsing is all-or-nothing: the first invalid field aborts the whole
/// parse with its specific error and no partial result is produced.
/// Repeated `label`, `message`, and `memo` keys resolve to the last
/// value; unknown query keys are ignored.
///
/// # Errors
///
/// - [`SolanaPayError::InvalidScheme`] if the input lacks the `solana:` prefix
/// - [`SolanaPayError::InvalidLink`] if a transaction link is malformed or not https
/// - [`SolanaPayError::InvalidRecipient`] if the recipient fails the address invariant
/// - [`SolanaPayError::InvalidAmount`] if `amount` is not an unsigned decimal
/// - [`SolanaPayError::InvalidSplToken`] / [`SolanaPayError::InvalidReference`]
///   if those address fields fail the invariant
pub fn parse_url(input: &str) -> Result<PaymentRequest, SolanaPayError> {
    let rest = input
        .strip_prefix(SOLANA_SCHEME)
        .ok_or(SolanaPayError::InvalidScheme)?;

    #[cfg(feature = "telemetry")]
    tracing::trace!(url = input, "parsing Solana Pay URL");

    if rest.starts_with(HTTPS_PREFIX) || rest.starts_with(HTTPS_PREFIX_ENCODED) {
        return parse_transaction(rest).map(PaymentRequest::Transaction);
    }
    parse_transfer(rest).map(PaymentRequest::Transfer)
}

fn parse_transaction(rest: &str) -> Result<TransactionRequest, SolanaPayError> {
    let link = percent_decode_str(rest)
        .decode_utf8()
        .map_err(|_| SolanaPayError::InvalidLink(rest.into()))?;
    TransactionRequest::try_new(&link)
}

fn parse_transfer(rest: &str) -> Result<TransferRequest, SolanaPayError> {
    let (recipient, query) = match rest.split_once('?') {
        Some((recipient, query)) => (recipient, Some(query)),
        None => (rest, None),
    };

    let recipient = recipient
        .parse::<Address>()
        .map_err(|_| SolanaPayError::InvalidRecipient(recipient.into()))?;
    let mut request = TransferRequest::new(recipient);

    let Some(query) = query else {
        return Ok(request);
    };

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "amount" => {
                let amount = value
                    .parse::<Amount>()
                    .map_err(|_| SolanaPayError::InvalidAmount(value.to_string()))?;
                request.amount = Some(amount);
            }
            "spl-token" => {
                let mint = value
                    .parse::<Address>()
                    .map_err(|_| SolanaPayError::InvalidSplToken(value.to_string()))?;
                request.spl_token = Some(mint);
            }
            "reference" => {
                let reference = value
                    .parse::<Address>()
                    .map_err(|_| SolanaPayError::InvalidReference(value.to_string()))?;
                request.reference.push(reference);
            }
            "label" => request.label = Some(value.into_owned()),
            "message" => request.message = Some(value.into_owned()),
            "memo" => request.memo = Some(value.into_owned()),
            _ => {}
        }
    }

    Ok(request)
}

/// Reports whether the input is a valid Solana Pay URL.
///
/// This is [`parse_url`] with the result collapsed to a boolean; it never
/// panics, whatever the input.
#[must_use]
pub fn validate_url(input: &str) -> bool {
    parse_url(input).is_ok()
}

/// Extracts the reference keys from a Solana Pay URL.
///
/// Transfer requests yield their reference list in query order; transfers
/// without references and transaction requests yield an empty list rather
/// than an absent value.
///
/// # Errors
///
/// Propagates any [`parse_url`] failure.
pub fn reference_keys(input: &str) -> Result<Vec<Address>, SolanaPayError> {
    match parse_url(input)? {
        PaymentRequest::Transfer(transfer) => Ok(transfer.reference),
        PaymentRequest::Transaction(_) => Ok(Vec::new()),
    }
}

/// Formats a Solana Pay URL for embedding in a QR code.
///
/// The URL is validated first, then percent-encoded as one payload,
/// leaving only URI structure characters unescaped.
///
/// # Errors
///
/// Returns [`SolanaPayError::InvalidUrl`] if the input does not validate.
pub fn qr_payload(input: &str) -> Result<String, SolanaPayError> {
    if !validate_url(input) {
        return Err(SolanaPayError::InvalidUrl);
    }
    Ok(utf8_percent_encode(input, QR_PAYLOAD).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECIPIENT: &str = "11111111111111111111111111111112";
    const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
    const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
    const TOKEN_PROGRAM: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

    fn transfer(recipient: &str) -> TransferRequest {
        TransferRequest::try_new(recipient).unwrap()
    }

    #[test]
    fn test_encode_basic_transfer() {
        let url = encode_transfer_url(&transfer(RECIPIENT), EncodeOptions::default());
        assert_eq!(url, format!("solana:{RECIPIENT}"));
    }

    #[test]
    fn test_encode_transfer_with_amount() {
        let request = transfer(RECIPIENT).with_amount(1_000_000u64.into());
        let url = encode_transfer_url(&request, EncodeOptions::default());

        assert!(url.starts_with(&format!("solana:{RECIPIENT}")));
        assert!(url.contains("amount=1000000"));

        let parsed = parse_url(&url).unwrap();
        let parsed = parsed.as_transfer().unwrap();
        assert_eq!(parsed.recipient.to_string(), RECIPIENT);
        assert_eq!(parsed.amount, Some(1_000_000u64.into()));
    }

    #[test]
    fn test_query_key_order_is_stable() {
        let request = transfer(RECIPIENT)
            .with_amount("0.001".parse().unwrap())
            .with_spl_token(USDC_MINT.parse().unwrap())
            .with_reference(SOL_MINT.parse().unwrap())
            .with_label("Coffee Shop")
            .with_message("Thanks!")
            .with_memo("Order #123");
        let url = encode_transfer_url(&request, EncodeOptions::default());

        assert_eq!(
            url,
            format!(
                "solana:{RECIPIENT}?amount=0.001&spl-token={USDC_MINT}\
                 &reference={SOL_MINT}&label=Coffee+Shop&message=Thanks%21&memo=Order+%23123"
            )
        );
    }

    #[test]
    fn test_transfer_round_trip() {
        let request = transfer(RECIPIENT)
            .with_amount("0.001".parse().unwrap())
            .with_label("Coffee Shop")
            .with_message("Thanks for your purchase!");
        let url = encode_transfer_url(&request, EncodeOptions::default());
        let parsed = parse_url(&url).unwrap();

        assert_eq!(parsed, PaymentRequest::Transfer(request));
    }

    #[test]
    fn test_amount_scale_survives_round_trip() {
        let request = transfer(RECIPIENT).with_amount("1.00".parse().unwrap());
        let url = encode_transfer_url(&request, EncodeOptions::default());
        assert!(url.contains("amount=1.00"));

        let parsed = parse_url(&url).unwrap();
        let amount = parsed.as_transfer().unwrap().amount.unwrap();
        assert_eq!(amount.to_string(), "1.00");
    }

    #[test]
    fn test_reference_order_and_multiplicity() {
        let a: Address = SOL_MINT.parse().unwrap();
        let b: Address = TOKEN_PROGRAM.parse().unwrap();
        let request = transfer(RECIPIENT).with_reference(a).with_reference(b);
        let url = encode_transfer_url(&request, EncodeOptions::default());
        let parsed = parse_url(&url).unwrap();

        assert_eq!(parsed.as_transfer().unwrap().reference, vec![a, b]);
    }

    #[test]
    fn test_no_references_parses_to_empty_list() {
        let url = encode_transfer_url(&transfer(RECIPIENT), EncodeOptions::default());
        let parsed = parse_url(&url).unwrap();
        assert!(parsed.as_transfer().unwrap().reference.is_empty());
    }

    #[test]
    fn test_spl_token_round_trip() {
        let request = transfer(RECIPIENT)
            .with_amount("1000000".parse().unwrap())
            .with_spl_token(USDC_MINT.parse().unwrap());
        let url = encode_transfer_url(&request, EncodeOptions::default());
        assert!(url.contains(&format!("spl-token={USDC_MINT}")));

        let parsed = parse_url(&url).unwrap();
        assert_eq!(
            parsed.as_transfer().unwrap().spl_token.unwrap().to_string(),
            USDC_MINT
        );
    }

    #[test]
    fn test_display_form_keeps_spaces() {
        let request = transfer(RECIPIENT).with_label("Coffee Shop");
        let url = encode_transfer_url(&request, EncodeOptions { encode: false });
        assert!(url.contains("label=Coffee Shop"));
    }

    #[test]
    fn test_encode_transaction_with_query() {
        let request =
            TransactionRequest::try_new("https://merchant.example.com/api/pay?session=abc")
                .unwrap();
        let url = encode_transaction_url(&request, EncodeOptions::default());

        assert!(url.starts_with(SOLANA_SCHEME));
        // The whole link is one component: its separators are escaped.
        assert!(url.contains("session%3Dabc"));
        assert!(!url.contains("https://"));

        let parsed = parse_url(&url).unwrap();
        assert_eq!(
            parsed.as_transaction().unwrap().link().as_str(),
            "https://merchant.example.com/api/pay?session=abc"
        );
    }

    #[test]
    fn test_transaction_round_trip_without_query() {
        let request = TransactionRequest::try_new("https://merchant.example.com/api/pay").unwrap();
        let url = encode_transaction_url(&request, EncodeOptions::default());
        let parsed = parse_url(&url).unwrap();
        assert_eq!(parsed, PaymentRequest::Transaction(request));
    }

    #[test]
    fn test_parse_raw_https_link() {
        // Other encoders may leave the link unencoded; still a transaction.
        let parsed = parse_url("solana:https://merchant.example.com/api/pay").unwrap();
        assert_eq!(
            parsed.as_transaction().unwrap().link().as_str(),
            "https://merchant.example.com/api/pay"
        );
    }

    #[test]
    fn test_transaction_display_form() {
        let request =
            TransactionRequest::try_new("https://merchant.example.com/api/pay?session=abc")
                .unwrap();
        let url = encode_transaction_url(&request, EncodeOptions { encode: false });
        assert_eq!(
            url,
            "solana:https://merchant.example.com/api/pay?session=abc"
        );
    }

    #[test]
    fn test_scheme_is_required_and_case_sensitive() {
        assert_eq!(parse_url("bitcoin:x"), Err(SolanaPayError::InvalidScheme));
        assert_eq!(
            parse_url(&format!("SOLANA:{RECIPIENT}")),
            Err(SolanaPayError::InvalidScheme)
        );
        assert!(!validate_url("bitcoin:x"));
    }

    #[test]
    fn test_invalid_recipient_rejected() {
        assert_eq!(
            parse_url("solana:not-an-address"),
            Err(SolanaPayError::InvalidRecipient("not-an-address".into()))
        );
    }

    #[test]
    fn test_invalid_amount_rejected() {
        for bad in ["abc", "-1", "1e6", ""] {
            let url = format!("solana:{RECIPIENT}?amount={bad}");
            assert!(
                matches!(parse_url(&url), Err(SolanaPayError::InvalidAmount(_))),
                "amount {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_spl_token_rejected() {
        let url = format!("solana:{RECIPIENT}?spl-token=zzz");
        assert_eq!(
            parse_url(&url),
            Err(SolanaPayError::InvalidSplToken("zzz".into()))
        );
    }

    #[test]
    fn test_invalid_reference_aborts_whole_parse() {
        // A valid reference before the invalid one does not survive.
        let url = format!("solana:{RECIPIENT}?reference={SOL_MINT}&reference=bogus");
        assert_eq!(
            parse_url(&url),
            Err(SolanaPayError::InvalidReference("bogus".into()))
        );
    }

    #[test]
    fn test_validator_handles_arbitrary_input() {
        for input in [
            "",
            "not-a-url",
            "solana:",
            "solana:?",
            "solana:https://",
            "solana:\u{1F680}",
            "solana:https%ZZ",
        ] {
            assert!(!validate_url(input), "{input:?} should be invalid");
        }
        assert!(validate_url(&format!("solana:{RECIPIENT}")));
    }

    #[test]
    fn test_repeated_text_keys_last_wins() {
        let url = format!("solana:{RECIPIENT}?label=first&label=second");
        let parsed = parse_url(&url).unwrap();
        assert_eq!(parsed.as_transfer().unwrap().label.as_deref(), Some("second"));
    }

    #[test]
    fn test_unknown_query_keys_ignored() {
        let url = format!("solana:{RECIPIENT}?foo=bar&amount=1");
        let parsed = parse_url(&url).unwrap();
        assert_eq!(parsed.as_transfer().unwrap().amount, Some(1u64.into()));
    }

    #[test]
    fn test_reference_keys_projection() {
        let a: Address = SOL_MINT.parse().unwrap();
        let b: Address = TOKEN_PROGRAM.parse().unwrap();
        let url = encode_transfer_url(
            &transfer(RECIPIENT).with_reference(a).with_reference(b),
            EncodeOptions::default(),
        );
        assert_eq!(reference_keys(&url).unwrap(), vec![a, b]);

        let bare = encode_transfer_url(&transfer(RECIPIENT), EncodeOptions::default());
        assert_eq!(reference_keys(&bare).unwrap(), Vec::new());

        let transaction = encode_transaction_url(
            &TransactionRequest::try_new("https://merchant.example.com/api/pay").unwrap(),
            EncodeOptions::default(),
        );
        assert_eq!(reference_keys(&transaction).unwrap(), Vec::new());

        assert!(reference_keys("bitcoin:x").is_err());
    }

    #[test]
    fn test_qr_payload_keeps_uri_structure() {
        let url = encode_transfer_url(
            &transfer(RECIPIENT).with_label("Coffee Shop"),
            EncodeOptions::default(),
        );
        let payload = qr_payload(&url).unwrap();

        assert!(payload.starts_with("solana:"));
        assert!(payload.contains("Coffee"));
        assert!(!payload.contains(' '));
    }

    #[test]
    fn test_qr_payload_rejects_invalid_url() {
        assert_eq!(qr_payload("invalid-url"), Err(SolanaPayError::InvalidUrl));
    }

    #[test]
    fn test_encode_url_dispatches_on_kind() {
        let transfer_url = encode_url(
            &PaymentRequest::from(transfer(RECIPIENT)),
            EncodeOptions::default(),
        );
        assert_eq!(transfer_url, format!("solana:{RECIPIENT}"));

        let request = TransactionRequest::try_new("https://merchant.example.com/api/pay").unwrap();
        let transaction_url = encode_url(
            &PaymentRequest::from(request),
            EncodeOptions::default(),
        );
        assert!(transaction_url.starts_with("solana:https%3A%2F%2F"));
    }
}
