//! Raw form input and its validation.
//!
//! Forms carry text exactly as the operator typed it. Validation turns a form into the
//! typed DTO the store accepts, or names the first field that is wrong.

use crate::model::{NewProduct, ProductUpdate, Rating};
use crate::product_actor::ProductError;
use clap::Args;

/// Fields for a new product.
#[derive(Debug, Clone, Default, Args)]
pub struct ProductForm {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub price: String,
    #[arg(long)]
    pub category: String,
    /// Image URL
    #[arg(long)]
    pub image: String,
    /// Rating between 0 and 5
    #[arg(long, default_value = "0")]
    pub rate: String,
    /// Number of ratings
    #[arg(long, default_value = "0")]
    pub count: String,
}

impl ProductForm {
    pub fn validate(self) -> Result<NewProduct, ProductError> {
        Ok(NewProduct {
            title: required("title", self.title)?,
            description: required("description", self.description)?,
            price: price(&self.price)?,
            category: required("category", self.category)?,
            image: required("image", self.image)?,
            rating: Rating {
                rate: rate(&self.rate)?,
                count: count(&self.count)?,
            },
            is_liked: false,
        })
    }
}

/// Fields to change on an existing product. Absent flags are left alone.
#[derive(Debug, Clone, Default, Args)]
pub struct EditForm {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub image: Option<String>,
    #[arg(long)]
    pub rate: Option<String>,
    #[arg(long)]
    pub count: Option<String>,
}

impl EditForm {
    pub fn validate(self) -> Result<ProductUpdate, ProductError> {
        let update = ProductUpdate {
            title: self.title.map(|v| required("title", v)).transpose()?,
            description: self
                .description
                .map(|v| required("description", v))
                .transpose()?,
            price: self.price.as_deref().map(price).transpose()?,
            category: self.category.map(|v| required("category", v)).transpose()?,
            image: self.image.map(|v| required("image", v)).transpose()?,
            rate: self.rate.as_deref().map(rate).transpose()?,
            count: self.count.as_deref().map(count).transpose()?,
            is_liked: None,
        };
        if update.is_empty() {
            return Err(ProductError::validation("form", "nothing to change"));
        }
        Ok(update)
    }
}

fn required(field: &'static str, value: String) -> Result<String, ProductError> {
    if value.trim().is_empty() {
        return Err(ProductError::validation(field, "is required"));
    }
    Ok(value)
}

fn price(raw: &str) -> Result<f64, ProductError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ProductError::validation(
            "price",
            "must be a non-negative number",
        )),
    }
}

fn rate(raw: &str) -> Result<f64, ProductError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if (0.0..=5.0).contains(&value) => Ok(value),
        _ => Err(ProductError::validation("rate", "must be between 0 and 5")),
    }
}

fn count(raw: &str) -> Result<u32, ProductError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ProductError::validation("count", "must be a non-negative whole number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProductForm {
        ProductForm {
            title: "Pen".into(),
            description: "Blue ink".into(),
            price: "1.50".into(),
            category: "Stationery".into(),
            image: "https://example.test/pen.png".into(),
            rate: "0".into(),
            count: "0".into(),
        }
    }

    fn invalid_field(result: Result<impl std::fmt::Debug, ProductError>) -> &'static str {
        match result {
            Err(ProductError::Validation { field, .. }) => field,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_form() {
        let product = form().validate().unwrap();
        assert_eq!(product.price, 1.5);
        assert_eq!(product.rating, Rating::default());
        assert!(!product.is_liked);
    }

    #[test]
    fn test_blank_text_fields_are_rejected() {
        let mut blank_title = form();
        blank_title.title = "   ".into();
        assert_eq!(invalid_field(blank_title.validate()), "title");

        let mut blank_image = form();
        blank_image.image = String::new();
        assert_eq!(invalid_field(blank_image.validate()), "image");
    }

    #[test]
    fn test_price_must_be_non_negative_number() {
        for raw in ["", "abc", "-1", "NaN", "inf"] {
            let mut f = form();
            f.price = raw.into();
            assert_eq!(invalid_field(f.validate()), "price", "{raw:?}");
        }

        let mut free = form();
        free.price = "0".into();
        assert_eq!(free.validate().unwrap().price, 0.0);
    }

    #[test]
    fn test_rating_bounds() {
        let mut high = form();
        high.rate = "5.5".into();
        assert_eq!(invalid_field(high.validate()), "rate");

        let mut negative_count = form();
        negative_count.count = "-3".into();
        assert_eq!(invalid_field(negative_count.validate()), "count");

        let mut ok = form();
        ok.rate = "4.8".into();
        ok.count = "12".into();
        let rating = ok.validate().unwrap().rating;
        assert_eq!(rating, Rating { rate: 4.8, count: 12 });
    }

    #[test]
    fn test_edit_form_validates_present_fields_only() {
        let update = EditForm {
            price: Some("9.99".into()),
            count: Some("3".into()),
            ..Default::default()
        }
        .validate()
        .unwrap();

        assert_eq!(update.price, Some(9.99));
        assert_eq!(update.count, Some(3));
        assert_eq!(update.title, None);

        let blank = EditForm {
            category: Some(" ".into()),
            ..Default::default()
        };
        assert_eq!(invalid_field(blank.validate()), "category");
    }

    #[test]
    fn test_empty_edit_form_is_rejected() {
        assert_eq!(invalid_field(EditForm::default().validate()), "form");
    }
}
