//! Runs one SSO pre-authentication handshake against a named environment and prints the URL
//! the end user should be redirected to.

// std
use std::{str::FromStr, time::Duration};
// crates.io
use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;
// self
use sso_token_client::{
	auth::{ApplicationId, ConsumerKey, ConsumerSecret, Login},
	client::{DEFAULT_CALLBACK, DEFAULT_VERSION, HandshakeRequest, TokenExchangeClient},
	environment::Environment,
	http::{HttpMethod, ReqwestHttpClient},
	sign::HmacSha1,
};

#[derive(Debug, Parser)]
#[command(name = "sso-try-auth", version, about = "Try an SSO pre-authentication handshake.")]
struct Cli {
	/// OAuth consumer key.
	key: String,
	/// Shared consumer secret.
	secret: String,
	/// Login of the user to pre-authenticate.
	login: String,
	/// Signature method.
	#[arg(long, default_value = HmacSha1::ID)]
	crypto: String,
	/// Callback URL sent as `oauth_callback`.
	#[arg(long, default_value = DEFAULT_CALLBACK)]
	callback: String,
	/// Target environment (`prod` or `staging`).
	#[arg(long, default_value = "prod")]
	env: String,
	/// Application the user lands on.
	#[arg(long, default_value = ApplicationId::DEFAULT)]
	application: String,
	/// Protocol version sent as `oauth_version`.
	#[arg(long = "crypto_version", default_value = DEFAULT_VERSION)]
	crypto_version: String,
	/// Request timeout in seconds.
	#[arg(long, default_value_t = 30)]
	timeout: u64,
	/// Log filter used when `RUST_LOG` is unset.
	#[arg(long, default_value = "info")]
	log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let cli = Cli::parse();

	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
		)
		.init();

	let environment = Environment::from_str(&cli.env)?;
	let request = HandshakeRequest::new(
		environment.request_token_url_str(),
		ConsumerKey::new(&cli.key)?,
		ConsumerSecret::new(cli.secret),
		Login::new(&cli.login)?,
	)
	.with_method(HttpMethod::get())
	.with_signature_method(cli.crypto)
	.with_version(cli.crypto_version)
	.with_callback(cli.callback)
	.with_application(ApplicationId::new(&cli.application)?);
	let http_client = ReqwestHttpClient::with_timeout(Duration::from_secs(cli.timeout))?;
	let client = <TokenExchangeClient<ReqwestHttpClient>>::with_http_client(http_client);
	let result = client.perform_handshake(request).await?;

	println!("Successful pre-authentication!");
	println!("Redirect user to {}", result.redirect_url);

	Ok(())
}
