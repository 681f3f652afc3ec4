use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::catalog::{BAC_KIEN, CHA_DO, CHA_LUA, GIO_THU, JAMBON, PATE, XUC_XICH_TOI};
use crate::domain::errors::DomainError;
use crate::domain::order::OrderForm;

#[derive(Debug, Parser)]
#[command(name = "deli-ordering", version, about = "Order bread fillings from the shop backend")]
pub struct Cli {
    /// Backend base URL; overrides ORDERING_API_BASE_URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Where the login session is kept; overrides ORDERING_SESSION_FILE.
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and remember the phone number.
    Login {
        phone: String,
        #[arg(long, env = "ORDERING_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Show who is logged in.
    Whoami,
    /// Report today's bread sales and waste.
    Sales {
        /// Loaves sold.
        #[arg(long, default_value = "")]
        bread: String,
        /// Spoiled meat thrown away, in grams.
        #[arg(long, default_value = "")]
        waste: String,
    },
    /// Price an order without sending it.
    Quote(OrderArgs),
    /// Place an order.
    Order(OrderArgs),
    /// Save delivery details and confirm an order.
    Confirm {
        #[arg(long)]
        order_id: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    /// List past orders with their totals.
    History,
    /// Show or update the delivery profile.
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Sales trend and worst waste day.
    Stats,
    /// Fetch the backend's order prediction.
    Predict,
    /// Show the prediction dashboard.
    Dashboard,
    /// Print the price list.
    Prices,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Show the stored profile.
    Show,
    /// Update name and address.
    Save {
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: String,
    },
}

/// Kilograms per product, as typed.
#[derive(Debug, Clone, Default, Args)]
pub struct OrderArgs {
    #[arg(long, default_value = "")]
    pub cha_lua: String,
    #[arg(long, default_value = "")]
    pub cha_do: String,
    #[arg(long, default_value = "")]
    pub gio_thu: String,
    #[arg(long, default_value = "")]
    pub jambon: String,
    #[arg(long, default_value = "")]
    pub xuc_xich_toi: String,
    #[arg(long, default_value = "")]
    pub pate: String,
    #[arg(long, default_value = "")]
    pub bac_kien: String,
}

impl OrderArgs {
    pub fn to_form(&self) -> Result<OrderForm, DomainError> {
        let mut form = OrderForm::new();
        for (id, raw) in [
            (CHA_LUA, &self.cha_lua),
            (CHA_DO, &self.cha_do),
            (GIO_THU, &self.gio_thu),
            (JAMBON, &self.jambon),
            (XUC_XICH_TOI, &self.xuc_xich_toi),
            (PATE, &self.pate),
            (BAC_KIEN, &self.bac_kien),
        ] {
            form.set(id, raw.as_str())?;
        }
        Ok(form)
    }
}
