use chrono::Utc;
use validator::Validate;

use crate::{
    entities::{
        contact::{ContactForm, ContactResponse},
        photographer::PhotographerId,
    },
    errors::AppError,
    repositories::catalog::CatalogRepository,
};

pub struct ContactHandler<R>
where
    R: CatalogRepository,
{
    pub catalog_repo: R,
}

impl<R> ContactHandler<R>
where
    R: CatalogRepository,
{
    pub fn new(catalog_repo: R) -> Self {
        ContactHandler { catalog_repo }
    }

    /// Validates a contact message for a photographer and records it in the
    /// log. Nothing is delivered or stored.
    pub async fn submit(
        &self,
        photographer_id: PhotographerId,
        form: ContactForm,
    ) -> Result<ContactResponse, AppError> {
        let form = form.normalized();
        form.validate()?;

        let photographer = self.catalog_repo.get_photographer(photographer_id).await?;

        tracing::info!(
            photographer_id = %photographer.id,
            photographer = %photographer.name,
            first_name = %form.first_name,
            last_name = %form.last_name,
            email = %form.email,
            message = %form.message,
            "Contact message received"
        );

        Ok(ContactResponse {
            message: "Your message has been received.".to_string(),
            photographer_id: photographer.id,
            recipient: photographer.name,
            received_at: Utc::now(),
        })
    }
}
