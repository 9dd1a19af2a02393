//! Order book command line client
//!
//! Read-only access to the order book API, printing JSON responses

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use orderbook_client::{
	FeeQuoteParams, OrderBookClientBuilder, OrderKind, PriceQuality, PriceQuoteParams,
	SupportedChainId, TokenAddress, TradesQuery,
};

// -------
// | Cli |
// -------

#[derive(Parser)]
#[command(name = "orderbook-cli")]
#[command(about = "Query orders, trades and prices from the order book API")]
struct Cli {
	/// Chain id or network name (mainnet, goerli, gnosis)
	#[arg(long, global = true, default_value = "mainnet")]
	chain: SupportedChainId,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
	Sell,
	Buy,
}

impl From<Side> for OrderKind {
	fn from(side: Side) -> Self {
		match side {
			Side::Sell => OrderKind::Sell,
			Side::Buy => OrderKind::Buy,
		}
	}
}

#[derive(Subcommand)]
enum Commands {
	/// Fetch a single order
	Order {
		uid: String,
	},
	/// List an account's orders
	Orders {
		owner: String,
		#[arg(long)]
		limit: Option<u32>,
		#[arg(long)]
		offset: Option<u32>,
	},
	/// List an account's trades
	Trades {
		owner: String,
		#[arg(long)]
		limit: Option<u32>,
		#[arg(long)]
		offset: Option<u32>,
	},
	/// Request a fee quote
	Quote {
		#[arg(long)]
		sell_token: TokenAddress,
		#[arg(long)]
		buy_token: TokenAddress,
		/// Amount in atoms, sell amount for sells and buy amount for buys
		#[arg(long)]
		amount: String,
		#[arg(long, value_enum, default_value = "sell")]
		side: Side,
		#[arg(long)]
		from: Option<String>,
		#[arg(long)]
		receiver: Option<String>,
		/// Unix timestamp the quoted order stays valid until
		#[arg(long)]
		valid_to: u32,
		#[arg(long)]
		fast: bool,
		/// Sell native currency through the eth-flow contract
		#[arg(long)]
		eth_flow: bool,
	},
	/// Price from the legacy markets endpoint
	Price {
		#[arg(long)]
		base_token: TokenAddress,
		#[arg(long)]
		quote_token: TokenAddress,
		#[arg(long)]
		amount: String,
		#[arg(long, value_enum, default_value = "sell")]
		side: Side,
	},
	/// Price of a token in native currency
	NativePrice {
		token: String,
	},
	/// Published price strategy
	Strategy,
	/// Affiliate statistics (mainnet only)
	Profile {
		address: String,
	},
	/// Print the API link of an order
	OrderLink {
		uid: String,
	},
}

// -----------
// | Helpers |
// -----------

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

// --------------
// | Entrypoint |
// --------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let cli = Cli::parse();
	let client = OrderBookClientBuilder::from_config()?
		.with_tracing(true)
		.build()?;
	let chain = cli.chain;

	match cli.command {
		Commands::Order { uid } => print_json(&client.get_order(chain, &uid).await?),
		Commands::Orders {
			owner,
			limit,
			offset,
		} => print_json(&client.get_orders(chain, &owner, limit, offset).await?),
		Commands::Trades {
			owner,
			limit,
			offset,
		} => {
			let query = TradesQuery {
				owner,
				limit,
				offset,
			};
			print_json(&client.get_trades(chain, &query).await?)
		},
		Commands::Quote {
			sell_token,
			buy_token,
			amount,
			side,
			from,
			receiver,
			valid_to,
			fast,
			eth_flow,
		} => {
			let params = FeeQuoteParams {
				chain_id: chain,
				sell_token,
				buy_token,
				amount,
				kind: side.into(),
				user_address: from,
				receiver,
				valid_to,
				price_quality: fast.then_some(PriceQuality::Fast),
				is_eth_flow: eth_flow,
			};
			print_json(&client.get_quote(&params).await?)
		},
		Commands::Price {
			base_token,
			quote_token,
			amount,
			side,
		} => {
			let params = PriceQuoteParams {
				chain_id: chain,
				base_token,
				quote_token,
				amount,
				kind: side.into(),
			};
			print_json(&client.get_price_quote_legacy(&params).await?)
		},
		Commands::NativePrice { token } => {
			print_json(&client.get_native_price(chain, &token).await?)
		},
		Commands::Strategy => print_json(&client.get_price_strategy(chain).await?),
		Commands::Profile { address } => {
			print_json(&client.get_profile_data(chain, &address).await?)
		},
		Commands::OrderLink { uid } => {
			println!("{}", client.order_link(chain, &uid)?);
			Ok(())
		},
	}
}
