use crate::application::ordering_service::OrderingService;
use crate::cli::{Command, ProfileCommand};
use crate::domain::ports::{KeyValueStore, OrderingApi};
use crate::domain::profile::Profile;
use crate::errors::AppError;

use super::format;

/// Run one command and return what to print.
pub async fn execute<A, S>(service: &mut OrderingService<A, S>, command: Command) -> Result<String, AppError>
where
    A: OrderingApi,
    S: KeyValueStore,
{
    service.restore_session();

    let output = match command {
        Command::Login { phone, password } => {
            let message = service.login(&phone, &password).await?;
            message.unwrap_or_else(|| format!("Logged in as {}", phone))
        }
        Command::Logout => {
            service.logout().await?;
            "Logged out".to_string()
        }
        Command::Whoami => match service.session().phone() {
            Some(phone) => phone.to_string(),
            None => "Not logged in".to_string(),
        },
        Command::Sales { bread, waste } => {
            let message = service.submit_sales(&bread, &waste).await?;
            message.unwrap_or_else(|| "Sales saved".to_string())
        }
        Command::Quote(args) => {
            let form = args.to_form()?;
            format::render_quote(&service.quote(&form))
        }
        Command::Order(args) => {
            let form = args.to_form()?;
            let placed = service.place_order(&form).await?;
            format!(
                "{}Order id: {}\nConfirm it with `confirm --order-id {}`",
                format::render_quote(&placed.priced),
                placed.order_id,
                placed.order_id
            )
        }
        Command::Confirm {
            order_id,
            name,
            phone,
            address,
        } => {
            let stored = service.load_profile().await.unwrap_or_else(|e| {
                log::warn!("Profile load error: {}", e);
                Profile::default()
            });
            let profile = Profile {
                name: name.unwrap_or(stored.name),
                phone: phone
                    .or_else(|| service.session().phone().map(str::to_string))
                    .unwrap_or(stored.phone),
                address: address.unwrap_or(stored.address),
            };
            service.confirm_order(order_id.as_deref(), &profile).await?;
            match order_id {
                Some(id) => format!("Order {} confirmed", id),
                None => "Profile updated".to_string(),
            }
        }
        Command::History => format::render_history(&service.order_history().await?),
        Command::Profile(ProfileCommand::Show) => format::render_profile(&service.load_profile().await?),
        Command::Profile(ProfileCommand::Save { name, address }) => {
            let phone = service.session().require_phone()?.to_string();
            let message = service
                .save_profile(&Profile::new(name, phone, address))
                .await?;
            message.unwrap_or_else(|| "Profile saved".to_string())
        }
        Command::Stats => format::render_stats(&service.stats().await?),
        Command::Predict => format::render_prediction(&service.prediction().await?),
        Command::Dashboard => format::render_dashboard(&service.prediction_dashboard()),
        Command::Prices => format::render_prices(service.prices()),
    };
    Ok(output)
}
