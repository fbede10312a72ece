//! Authentication and payment seams.
//!
//! Both services are traits so a real backend can be dropped in; the demo
//! implementations only validate input on the client.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::PaymentMethod;
use crate::error::{AuthError, PaymentError};

/// Minimum password length accepted by [`DemoAuth`].
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// `MM/YY` with a real month.
static EXPIRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/\d{2}$").expect("expiry pattern"));

#[must_use]
pub fn is_email_valid(email: &str) -> bool {
    EMAIL.is_match(email.trim())
}

fn require<E>(value: &str, field: &'static str, err: fn(&'static str) -> E) -> Result<(), E> {
    if value.trim().is_empty() {
        Err(err(field))
    } else {
        Ok(())
    }
}

// =============================================================================
// Authentication
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

pub trait AuthService: Send + Sync {
    fn login(&self, credentials: &Credentials) -> Result<(), AuthError>;
    fn signup(&self, form: &SignupForm) -> Result<(), AuthError>;
}

/// Accepts any well-formed input.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoAuth;

impl DemoAuth {
    fn check_email(email: &str) -> Result<(), AuthError> {
        require(email, "email", AuthError::MissingField)?;
        if !is_email_valid(email) {
            return Err(AuthError::InvalidEmail);
        }
        Ok(())
    }
}

impl AuthService for DemoAuth {
    fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        Self::check_email(&credentials.email)?;
        require(&credentials.password, "password", AuthError::MissingField)?;
        log::debug!("demo login accepted");
        Ok(())
    }

    fn signup(&self, form: &SignupForm) -> Result<(), AuthError> {
        require(&form.name, "name", AuthError::MissingField)?;
        Self::check_email(&form.email)?;
        require(&form.password, "password", AuthError::MissingField)?;
        if form.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        if form.password != form.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if !form.accept_terms {
            return Err(AuthError::TermsNotAccepted);
        }
        log::debug!("demo signup accepted");
        Ok(())
    }
}

// =============================================================================
// Payment
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardDetails {
    pub number: String,
    pub holder: String,
    /// `MM/YY`.
    pub expiry: String,
    pub cvv: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentRequest {
    /// Id of a [`PaymentMethod`].
    pub method: String,
    /// Required when the method is a card.
    pub card: Option<CardDetails>,
}

/// Outcome of an accepted submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentStatus {
    /// Accepted, settlement pending. The screen stays where it is.
    Processing,
}

pub trait PaymentGateway: Send + Sync {
    fn submit(&self, request: &PaymentRequest) -> Result<PaymentStatus, PaymentError>;
}

/// Validates the form and reports every valid submission as processing.
#[derive(Clone, Debug, Default)]
pub struct DemoPayments {
    methods: Vec<PaymentMethod>,
}

impl DemoPayments {
    pub fn new(methods: &[PaymentMethod]) -> Self {
        Self {
            methods: methods.to_vec(),
        }
    }

    fn validate_card(card: &CardDetails) -> Result<(), PaymentError> {
        require(&card.number, "card number", PaymentError::MissingField)?;
        require(&card.holder, "cardholder name", PaymentError::MissingField)?;
        require(&card.expiry, "expiry date", PaymentError::MissingField)?;
        require(&card.cvv, "CVV", PaymentError::MissingField)?;

        let digits: String = card.number.chars().filter(|c| !c.is_whitespace()).collect();
        if !(13..=19).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(PaymentError::InvalidCardNumber);
        }
        if !EXPIRY.is_match(card.expiry.trim()) {
            return Err(PaymentError::InvalidExpiry);
        }
        let cvv = card.cvv.trim();
        if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(PaymentError::InvalidCvv);
        }
        Ok(())
    }
}

impl PaymentGateway for DemoPayments {
    fn submit(&self, request: &PaymentRequest) -> Result<PaymentStatus, PaymentError> {
        let method = self
            .methods
            .iter()
            .find(|m| m.id == request.method)
            .ok_or_else(|| PaymentError::UnknownMethod(request.method.clone()))?;

        if method.card {
            let card = request
                .card
                .as_ref()
                .ok_or(PaymentError::MissingField("card details"))?;
            Self::validate_card(card)?;
        }
        log::info!("demo payment via {} accepted", method.name);
        Ok(PaymentStatus::Processing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn methods() -> Vec<PaymentMethod> {
        vec![
            PaymentMethod {
                id: "credit-card".into(),
                name: "Credit Card".into(),
                icon: String::new(),
                card: true,
            },
            PaymentMethod {
                id: "gopay".into(),
                name: "GoPay".into(),
                icon: String::new(),
                card: false,
            },
        ]
    }

    fn card() -> CardDetails {
        CardDetails {
            number: "4111 1111 1111 1111".into(),
            holder: "John Doe".into(),
            expiry: "08/27".into(),
            cvv: "123".into(),
        }
    }

    fn pay(method: &str, card: Option<CardDetails>) -> Result<PaymentStatus, PaymentError> {
        DemoPayments::new(&methods()).submit(&PaymentRequest {
            method: method.into(),
            card,
        })
    }

    fn signup() -> SignupForm {
        SignupForm {
            name: "Rina".into(),
            email: "rina@kualala.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            accept_terms: true,
        }
    }

    #[test]
    fn test_patterns_compile() {
        LazyLock::force(&EMAIL);
        LazyLock::force(&EXPIRY);
        assert!(EXPIRY.is_match("12/27"));
        assert!(!EXPIRY.is_match("13/27"));
    }

    #[test]
    fn test_email_validation() {
        assert!(is_email_valid("user@kualala.com"));
        assert!(is_email_valid("  user@kualala.com "));
        assert!(!is_email_valid("user@kualala"));
        assert!(!is_email_valid("user kualala.com"));
        assert!(!is_email_valid(""));
    }

    #[test]
    fn test_login() {
        let auth = DemoAuth;
        let ok = Credentials {
            email: "user@kualala.com".into(),
            password: "x".into(),
        };
        assert_eq!(auth.login(&ok), Ok(()));

        let missing = Credentials {
            password: String::new(),
            ..ok.clone()
        };
        assert_eq!(auth.login(&missing), Err(AuthError::MissingField("password")));

        let bad = Credentials {
            email: "nope".into(),
            ..ok
        };
        assert_eq!(auth.login(&bad), Err(AuthError::InvalidEmail));
    }

    #[test]
    fn test_signup_rules() {
        let auth = DemoAuth;
        assert_eq!(auth.signup(&signup()), Ok(()));

        let mut form = signup();
        form.confirm_password = "secret2".into();
        assert_eq!(auth.signup(&form), Err(AuthError::PasswordMismatch));

        let mut form = signup();
        form.accept_terms = false;
        assert_eq!(auth.signup(&form), Err(AuthError::TermsNotAccepted));

        let mut form = signup();
        form.password = "abc".into();
        form.confirm_password = "abc".into();
        assert_eq!(
            auth.signup(&form),
            Err(AuthError::PasswordTooShort(MIN_PASSWORD_LEN))
        );

        let mut form = signup();
        form.name = "  ".into();
        assert_eq!(auth.signup(&form), Err(AuthError::MissingField("name")));
    }

    #[test]
    fn test_card_payment_processing() {
        assert_eq!(pay("credit-card", Some(card())), Ok(PaymentStatus::Processing));
    }

    #[test]
    fn test_wallet_needs_no_card() {
        assert_eq!(pay("gopay", None), Ok(PaymentStatus::Processing));
    }

    #[test]
    fn test_card_validation() {
        assert_eq!(
            pay("credit-card", None),
            Err(PaymentError::MissingField("card details"))
        );

        let mut c = card();
        c.number = "1234".into();
        assert_eq!(pay("credit-card", Some(c)), Err(PaymentError::InvalidCardNumber));

        let mut c = card();
        c.expiry = "13/27".into();
        assert_eq!(pay("credit-card", Some(c)), Err(PaymentError::InvalidExpiry));

        let mut c = card();
        c.cvv = "12a".into();
        assert_eq!(pay("credit-card", Some(c)), Err(PaymentError::InvalidCvv));

        let mut c = card();
        c.holder = String::new();
        assert_eq!(
            pay("credit-card", Some(c)),
            Err(PaymentError::MissingField("cardholder name"))
        );
    }

    #[test]
    fn test_unknown_method() {
        assert_eq!(
            pay("bitcoin", None),
            Err(PaymentError::UnknownMethod("bitcoin".into()))
        );
    }
}
