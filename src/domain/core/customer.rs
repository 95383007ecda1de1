use derive_more::{Display, Error};
use validator::ValidateEmail;

/// 予約したお客様
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
    phone: String,
    email: String,
}

impl Customer {
    pub fn create(name: String, phone: String, email: String) -> Result<Self, CustomerError> {
        Self::validate_name(&name)?;
        match email.validate_email() && Self::has_dotted_domain(&email) {
            true => Ok(Self { name, phone, email }),
            false => Err(CustomerError::InvalidEmail),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    fn validate_name(name: &str) -> Result<(), CustomerError> {
        match name.is_empty() {
            true => Err(CustomerError::NameIsEmpty),
            false => Ok(()),
        }
    }

    /// `a@localhost` のようなドメイン部にドットのないアドレスは受け付けない
    fn has_dotted_domain(email: &str) -> bool {
        email
            .rsplit_once('@')
            .map_or(false, |(_, domain)| domain.contains('.'))
    }
}

/// お客様エラー
#[derive(Error, Display, Debug, PartialEq, Eq)]
pub enum CustomerError {
    /// 名前が空です
    #[display(fmt = "Name must not be empty")]
    NameIsEmpty,
    /// メールアドレスが不正です
    #[display(fmt = "Value is not a valid email address")]
    InvalidEmail,
}
