use super::CustomerError;

/// Postal address of a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    /// Creates a validated address. All fields are required and the street
    /// number must be non-zero.
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, CustomerError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.street.is_empty() {
            return Err(CustomerError::InvalidAddress("street"));
        }
        if self.number == 0 {
            return Err(CustomerError::InvalidAddress("number"));
        }
        if self.zip.is_empty() {
            return Err(CustomerError::InvalidAddress("zip"));
        }
        if self.city.is_empty() {
            return Err(CustomerError::InvalidAddress("city"));
        }
        Ok(())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}
