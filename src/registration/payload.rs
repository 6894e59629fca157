use rand::Rng;
use serde::Serialize;

const PASSWORD_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const PASSWORD_LENGTH: usize = 10;

/// What the user typed into the pre-registration dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub email: String,
    pub full_name: String,
}

impl RegistrationForm {
    /// Both fields are required; nothing beyond presence is checked, the same
    /// rule the inputs' `required` attribute applies.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.full_name.is_empty()
    }
}

/// Body of `POST /v1/users`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub enabled: bool,
    pub email_verified: bool,
}

impl RegistrationPayload {
    pub fn from_form<R: Rng + ?Sized>(form: &RegistrationForm, rng: &mut R) -> Self {
        let (first_name, last_name) = split_full_name(&form.full_name);

        Self {
            username: generate_username(&form.email, rng),
            email: form.email.clone(),
            first_name,
            last_name,
            password: generate_password(rng),
            enabled: true,
            email_verified: false,
        }
    }
}

/// First token is the first name, everything after it is the last name.
pub fn split_full_name(full_name: &str) -> (String, String) {
    let mut parts = full_name.split_whitespace();
    let first_name = parts.next().unwrap_or_default().to_string();
    let last_name = parts.collect::<Vec<_>>().join(" ");
    (first_name, last_name)
}

/// Local part of the email with dots turned into underscores, plus a
/// random four digit suffix.
pub fn generate_username<R: Rng + ?Sized>(email: &str, rng: &mut R) -> String {
    let local_part = email.split('@').next().unwrap_or_default();
    let suffix: u16 = rng.gen_range(1000..=9999);
    format!("{}_{}", local_part.replace('.', "_"), suffix)
}

pub fn generate_password<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..PASSWORD_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..PASSWORD_CHARSET.len());
            PASSWORD_CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn split_suffix(username: &str) -> (&str, &str) {
        username.rsplit_once('_').expect("username has a suffix")
    }

    #[test]
    fn username_replaces_dots_in_local_part() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let username = generate_username("a.b@example.com", &mut rng);
            let (prefix, suffix) = split_suffix(&username);
            assert_eq!(prefix, "a_b");
            assert_eq!(suffix.len(), 4);
            let n: u16 = suffix.parse().unwrap();
            assert!((1000..=9999).contains(&n));
        }
    }

    #[test]
    fn username_without_at_sign_uses_whole_input() {
        let mut rng = StdRng::seed_from_u64(1);
        let username = generate_username("first.last", &mut rng);
        assert_eq!(split_suffix(&username).0, "first_last");
    }

    #[test]
    fn full_name_keeps_everything_after_first_token_as_last_name() {
        assert_eq!(
            split_full_name("João da Silva"),
            ("João".to_string(), "da Silva".to_string())
        );
        assert_eq!(
            split_full_name("  Ana   Maria  Costa "),
            ("Ana".to_string(), "Maria Costa".to_string())
        );
    }

    #[test]
    fn single_token_name_has_empty_last_name() {
        assert_eq!(split_full_name("Maria"), ("Maria".to_string(), String::new()));
        assert_eq!(split_full_name("   "), (String::new(), String::new()));
    }

    #[test]
    fn password_is_ten_alphanumerics() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let password = generate_password(&mut rng);
            assert_eq!(password.len(), 10);
            assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn payload_serializes_with_backend_field_names() {
        let form = RegistrationForm {
            email: "joao.silva@example.com".to_string(),
            full_name: "João da Silva".to_string(),
        };
        let payload = RegistrationPayload::from_form(&form, &mut StdRng::seed_from_u64(3));
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["email"], "joao.silva@example.com");
        assert_eq!(json["firstName"], "João");
        assert_eq!(json["lastName"], "da Silva");
        assert_eq!(json["enabled"], true);
        assert_eq!(json["emailVerified"], false);
        assert!(json["username"].as_str().unwrap().starts_with("joao_silva_"));
        assert_eq!(json["password"].as_str().unwrap().len(), 10);
        assert_eq!(json.as_object().unwrap().len(), 7);
    }

    #[test]
    fn form_requires_both_fields() {
        let mut form = RegistrationForm::default();
        assert!(!form.is_complete());
        form.email = "maria@example.com".to_string();
        assert!(!form.is_complete());
        form.full_name = "Maria".to_string();
        assert!(form.is_complete());
    }

    #[test]
    fn whitespace_name_counts_as_present() {
        let form = RegistrationForm {
            email: "maria@example.com".to_string(),
            full_name: "   ".to_string(),
        };
        assert!(form.is_complete());

        let payload = RegistrationPayload::from_form(&form, &mut StdRng::seed_from_u64(9));
        assert_eq!(payload.first_name, "");
        assert_eq!(payload.last_name, "");
    }
}
