use super::errors::DomainError;

/// Password the backend profile upsert expects alongside every profile.
pub const DEFAULT_PROFILE_PASSWORD: &str = "123456";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// Every field must be filled in before the profile is sent.
    pub fn validate(&self) -> Result<(), DomainError> {
        let missing: Vec<&str> = [
            ("name", &self.name),
            ("phone", &self.phone),
            ("address", &self.address),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::InvalidInput(format!(
                "missing {}",
                missing.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_profile_is_valid() {
        assert!(Profile::new("Lan", "0901234567", "12 Lê Lợi").validate().is_ok());
    }

    #[test]
    fn blank_fields_are_listed() {
        let err = Profile::new("Lan", " ", "").validate().expect_err("incomplete");
        assert_eq!(err.to_string(), "Invalid input: missing phone, address");
    }
}
