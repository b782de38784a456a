use std::fmt;

use thiserror::Error;

use crate::listing::types::{Draft, Record};

/// The editable fields of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Color,
    Price,
    Description,
    ImageUrl,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Color,
        Field::Price,
        Field::Description,
        Field::ImageUrl,
    ];

    /// Human-readable label for prompts and error output.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Color => "Color",
            Field::Price => "Price",
            Field::Description => "Description",
            Field::ImageUrl => "Image URL",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    Required,
    NotANumber,
    NotPositive,
    InvalidUrl,
}

impl Problem {
    fn message(self) -> &'static str {
        match self {
            Problem::Required => "is required",
            Problem::NotANumber => "must be a number",
            Problem::NotPositive => "must be greater than zero",
            Problem::InvalidUrl => "must start with http:// or https://",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub problem: Problem,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.problem.message())
    }
}

/// A form failed validation. Lists every failing field, in field order.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid listing: {}", summary(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn problem(&self, field: Field) -> Option<Problem> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.problem)
    }

    pub fn has(&self, field: Field) -> bool {
        self.problem(field).is_some()
    }
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Raw text of a listing as entered by a user. Nothing here is trusted
/// until [`ListingForm::validate`] turns it into a [`Draft`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingForm {
    pub name: String,
    pub color: String,
    pub price: String,
    pub description: String,
    pub image_url: String,
}

impl ListingForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Color => &self.color,
            Field::Price => &self.price,
            Field::Description => &self.description,
            Field::ImageUrl => &self.image_url,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Color => self.color = value,
            Field::Price => self.price = value,
            Field::Description => self.description = value,
            Field::ImageUrl => self.image_url = value,
        }
    }

    pub fn validate(&self) -> Result<Draft, ValidationError> {
        let mut errors = Vec::new();

        let name = required_text(Field::Name, &self.name, &mut errors);
        let color = required_text(Field::Color, &self.color, &mut errors);
        let price = match parse_price(&self.price) {
            Ok(price) => price,
            Err(problem) => {
                errors.push(FieldError {
                    field: Field::Price,
                    problem,
                });
                0.0
            }
        };
        let description = required_text(Field::Description, &self.description, &mut errors);
        let image_url = match check_image_url(&self.image_url) {
            Ok(url) => url.to_string(),
            Err(problem) => {
                errors.push(FieldError {
                    field: Field::ImageUrl,
                    problem,
                });
                String::new()
            }
        };

        if !errors.is_empty() {
            return Err(ValidationError { errors });
        }

        Ok(Draft {
            name,
            color,
            price,
            description,
            image_url,
        })
    }
}

impl From<&Record> for ListingForm {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            color: record.color.clone(),
            price: format_plain_price(record.price),
            description: record.description.clone(),
            image_url: record.image_url.clone(),
        }
    }
}

fn required_text(field: Field, raw: &str, errors: &mut Vec<FieldError>) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(FieldError {
            field,
            problem: Problem::Required,
        });
    }
    trimmed.to_string()
}

fn parse_price(raw: &str) -> Result<f64, Problem> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Problem::Required);
    }
    // `f64::from_str` accepts "inf" and "NaN"; neither is a price.
    let price: f64 = trimmed.parse().map_err(|_| Problem::NotANumber)?;
    if !price.is_finite() {
        return Err(Problem::NotANumber);
    }
    if price <= 0.0 {
        return Err(Problem::NotPositive);
    }
    Ok(price)
}

fn check_image_url(raw: &str) -> Result<&str, Problem> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Problem::Required);
    }
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or(Problem::InvalidUrl)?;
    if rest.is_empty() {
        return Err(Problem::InvalidUrl);
    }
    Ok(trimmed)
}

/// Price as the user would type it back: no exponent, no trailing `.0`.
fn format_plain_price(price: f64) -> String {
    if price.fract() == 0.0 && price.abs() < 1e15 {
        format!("{}", price as i64)
    } else {
        price.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_price_drops_trailing_zero() {
        assert_eq!(format_plain_price(18_500_000.0), "18500000");
        assert_eq!(format_plain_price(12.5), "12.5");
    }

    #[test]
    fn url_needs_something_after_scheme() {
        assert_eq!(check_image_url("https://"), Err(Problem::InvalidUrl));
        assert_eq!(check_image_url("ftp://x/y.jpg"), Err(Problem::InvalidUrl));
        assert_eq!(check_image_url(" http://x "), Ok("http://x"));
    }

    #[test]
    fn price_rejects_non_finite() {
        assert_eq!(parse_price("inf"), Err(Problem::NotANumber));
        assert_eq!(parse_price("NaN"), Err(Problem::NotANumber));
        assert_eq!(parse_price("0"), Err(Problem::NotPositive));
        assert_eq!(parse_price(" 12.5 "), Ok(12.5));
    }
}
