use crate::error::{LandingError, LandingErrorExt, Party};
use mona_domain::config::{DeploymentConfiguration, OfferConfiguration};
use mona_domain::constants::FRIENDLY_NAME_CLAIMS;
use mona_domain::landing::LandingPageModel;
use mona_domain::marketplace::MarketplaceError;
use mona_domain::subscription::{MarketplaceUser, Subscription};
use mona_kernel::security::claims::ClaimsSource;
use tracing::debug;

/// Builds a [`LandingPageModel`] from the sources a landing page request gathers.
///
/// Every step consumes the composer and hands it back, so a request handler can chain:
///
/// ```rust
/// use mona_domain::config::OfferConfiguration;
/// use mona_kernel::security::claims::Claims;
/// use mona_landing::LandingPageComposer;
///
/// # fn main() -> Result<(), mona_landing::LandingError> {
/// let claims = Claims::new().with("name", "Ada Lovelace");
/// let offer = OfferConfiguration::default();
///
/// let model = LandingPageComposer::new()
///     .with_current_user_information(Some(&claims))
///     .with_offer_information(Some(&offer))?
///     .build();
///
/// assert_eq!(model.user_friendly_name.as_deref(), Some("Ada Lovelace"));
/// # Ok(())
/// # }
/// ```
///
/// Steps touch disjoint fields, so their order does not matter; reapplying a step with the
/// same input yields the same model.
#[must_use = "the composer does nothing until `.build()` is called"]
#[derive(Debug, Clone, Default)]
pub struct LandingPageComposer {
    model: LandingPageModel,
}

impl From<LandingPageModel> for LandingPageComposer {
    fn from(model: LandingPageModel) -> Self {
        Self { model }
    }
}

impl LandingPageComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the user's friendly name from the given name claim, falling back to `name`.
    ///
    /// Anonymous requests (`None`) and principals without either claim leave the name as is.
    pub fn with_current_user_information<C>(mut self, claims: Option<&C>) -> Self
    where
        C: ClaimsSource + ?Sized,
    {
        let Some(claims) = claims else {
            debug!("Anonymous landing page request");
            return self;
        };

        match claims.preferred_claim(&FRIENDLY_NAME_CLAIMS) {
            Some(name) => self.model.user_friendly_name = Some(name.to_owned()),
            None => debug!("No friendly name claim on the current principal"),
        }
        self
    }

    /// Copies the offer and publisher display fields.
    ///
    /// # Errors
    /// Returns [`LandingError::InvalidArgument`] when `offer` is `None`.
    pub fn with_offer_information(
        mut self,
        offer: Option<&OfferConfiguration>,
    ) -> Result<Self, LandingError> {
        let offer = offer.ok_or_else(|| LandingError::invalid_argument("offer"))?;

        let model = &mut self.model;
        model.offer_display_name.clone_from(&offer.offer_display_name);
        model.offer_marketing_page_url.clone_from(&offer.offer_marketing_page_url);
        model.offer_marketplace_listing_url.clone_from(&offer.offer_marketplace_listing_url);
        model.publisher_contact_page_url.clone_from(&offer.publisher_contact_page_url);
        model.publisher_copyright_notice.clone_from(&offer.publisher_copyright_notice);
        model.publisher_display_name.clone_from(&offer.publisher_display_name);
        model.publisher_home_page_url.clone_from(&offer.publisher_home_page_url);
        model.publisher_privacy_notice_page_url.clone_from(&offer.publisher_privacy_notice_page_url);

        debug!(offer = ?offer.offer_display_name, "Applied offer information");
        Ok(self)
    }

    /// Copies subscription identifiers, seats, trial flag and both party email addresses.
    ///
    /// Both parties are checked before anything is written, so a failed call leaves the
    /// model untouched.
    ///
    /// # Errors
    /// * [`LandingError::InvalidArgument`] when `subscription` is `None`.
    /// * [`LandingError::MissingParty`] when the purchaser or beneficiary is absent.
    pub fn with_subscription_information(
        mut self,
        subscription: Option<&Subscription>,
    ) -> Result<Self, LandingError> {
        let subscription =
            subscription.ok_or_else(|| LandingError::invalid_argument("subscription"))?;

        let (beneficiary, purchaser) = parties(subscription)
            .context(format!("subscription {}", subscription.subscription_id))?;

        let model = &mut self.model;
        model.beneficiary_email_address = Some(beneficiary.user_email.clone());
        model.purchaser_email_address = Some(purchaser.user_email.clone());
        model.is_free_trial = Some(subscription.is_free_trial);
        model.offer_id = Some(subscription.offer_id.clone());
        model.plan_id = Some(subscription.plan_id.clone());
        model.seat_quantity = subscription.seat_quantity;
        model.subscription_id = Some(subscription.subscription_id.clone());
        model.subscription_name = Some(subscription.subscription_name.clone());

        debug!(subscription_id = %subscription.subscription_id, "Applied subscription information");
        Ok(self)
    }

    /// Flags the page as a failure page with the given code.
    ///
    /// # Errors
    /// Returns [`LandingError::InvalidArgument`] when `error_code` is `None` or empty.
    pub fn with_error_code(mut self, error_code: Option<&str>) -> Result<Self, LandingError> {
        let error_code = error_code
            .filter(|code| !code.is_empty())
            .ok_or_else(|| LandingError::invalid_argument("error_code"))?;

        debug!(error_code, "Applied error code");
        self.model.error_code = Some(error_code.to_owned());
        Ok(self)
    }

    /// Flags the page with the code of an error returned by the marketplace.
    ///
    /// # Errors
    /// Returns [`LandingError::InvalidArgument`] when `error` is `None` or carries no code.
    pub fn with_marketplace_error(
        self,
        error: Option<&MarketplaceError>,
    ) -> Result<Self, LandingError> {
        let error = error.ok_or_else(|| LandingError::invalid_argument("marketplace_error"))?;

        self.with_error_code(error.error_code.as_deref())
            .context(error.error_message.clone().unwrap_or_else(|| "marketplace error".to_owned()))
    }

    /// Tells the page whether this deployment runs in test mode.
    ///
    /// # Errors
    /// Returns [`LandingError::InvalidArgument`] when `deployment` is `None`.
    pub fn with_deployment_information(
        mut self,
        deployment: Option<&DeploymentConfiguration>,
    ) -> Result<Self, LandingError> {
        let deployment = deployment.ok_or_else(|| LandingError::invalid_argument("deployment"))?;

        self.model.in_test_mode = Some(deployment.is_test_mode_enabled);
        Ok(self)
    }

    /// Returns the model accumulated so far without consuming the composer.
    pub const fn model(&self) -> &LandingPageModel {
        &self.model
    }

    /// Finishes composition and hands the model to the renderer.
    pub fn build(self) -> LandingPageModel {
        self.model
    }
}

fn parties(
    subscription: &Subscription,
) -> Result<(&MarketplaceUser, &MarketplaceUser), LandingError> {
    let beneficiary = subscription
        .beneficiary
        .as_ref()
        .ok_or(LandingError::MissingParty { party: Party::Beneficiary, context: None })?;
    let purchaser = subscription
        .purchaser
        .as_ref()
        .ok_or(LandingError::MissingParty { party: Party::Purchaser, context: None })?;
    Ok((beneficiary, purchaser))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_exposes_progress_without_consuming() {
        let composer = LandingPageComposer::new().with_error_code(Some("E001")).unwrap();
        assert_eq!(composer.model().error_code.as_deref(), Some("E001"));
        assert_eq!(composer.build().error_code.as_deref(), Some("E001"));
    }

    #[test]
    fn composer_can_resume_an_existing_model() {
        let model = LandingPageModel { plan_id: Some("gold".to_owned()), ..Default::default() };
        let model = LandingPageComposer::from(model).with_error_code(Some("E002")).unwrap().build();

        assert_eq!(model.plan_id.as_deref(), Some("gold"));
        assert_eq!(model.error_code.as_deref(), Some("E002"));
    }

    #[test]
    fn missing_party_carries_subscription_context() {
        let subscription = Subscription {
            subscription_id: "sub-9".to_owned(),
            beneficiary: Some(MarketplaceUser::default()),
            ..Default::default()
        };

        let err = LandingPageComposer::new()
            .with_subscription_information(Some(&subscription))
            .unwrap_err();
        assert_eq!(err.to_string(), "Subscription has no purchaser (subscription sub-9)");
    }
}
