//! LockRedeem bridge tool
//!
//! Offline commands inspect the bound artifacts (selectors, ABIs, calldata).
//! Online commands read the environment configuration (see `config`) and talk
//! to the configured node and bridge.

use alloy::{
    dyn_abi::DynSolValue,
    primitives::{Address, U256},
};
use clap::{Parser, Subcommand};
use eyre::{eyre, Result, WrapErr};
use tracing::info;

use lockredeem_bindings::{
    artifacts::ContractKind,
    config::Config,
    evm::{coerce_args, deploy_kind, BridgeEvents, CallOpts, EvmClient, TransactOpts},
    selectors::selector_hex,
};

#[derive(Parser)]
#[command(name = "lockredeem")]
#[command(about = "Bindings and tooling for the LockRedeem bridge contracts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print and verify function selectors and event topics
    Selectors {
        /// Only this contract (e.g. lock_redeem_v2)
        #[arg(short, long)]
        kind: Option<ContractKind>,
    },

    /// Print the JSON ABI of a contract
    Abi {
        #[arg(short, long)]
        kind: ContractKind,
    },

    /// Decode calldata against a contract ABI
    Decode {
        #[arg(short, long)]
        kind: ContractKind,
        /// Hex calldata, selector included
        data: String,
    },

    /// Show chain and bridge state
    Status,

    /// Lock ether in the bridge
    Lock {
        /// Amount in wei
        #[arg(long)]
        amount: U256,
    },

    /// Sign a pending redeem as a validator
    Sign {
        /// Amount in wei
        #[arg(long)]
        amount: U256,
        #[arg(long)]
        recipient: Address,
    },

    /// Open a redeem request
    Redeem {
        /// Amount in wei (or token units on ERC20 bridges)
        #[arg(long)]
        amount: U256,
        /// Token to redeem, for the single-contract ERC20 bridge
        #[arg(long)]
        token: Option<Address>,
        /// Redeem fee sent along, for bridges that charge one
        #[arg(long)]
        fee: Option<U256>,
    },

    /// Stream bridge events until interrupted
    Watch {
        /// First block to read; defaults to the next safe block
        #[arg(long)]
        from_block: Option<u64>,
    },

    /// Deploy a contract from its bound bytecode
    Deploy {
        #[arg(short, long)]
        kind: ContractKind,
        /// Constructor arguments, in ABI order (arrays as [a,b])
        args: Vec<String>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async_main(cli))
}

async fn async_main(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Commands::Selectors { kind } => print_selectors(kind),
        Commands::Abi { kind } => {
            println!("{}", serde_json::to_string_pretty(&kind.abi())?);
            Ok(())
        }
        Commands::Decode { kind, data } => decode_calldata(kind, &data),
        Commands::Status => status().await,
        Commands::Lock { amount } => {
            let opts = TransactOpts::default().with_value(amount);
            submit("lock", vec![], opts).await
        }
        Commands::Sign { amount, recipient } => {
            let args = vec![
                DynSolValue::Uint(amount, 256),
                DynSolValue::Address(recipient),
            ];
            submit("sign", args, TransactOpts::default()).await
        }
        Commands::Redeem { amount, token, fee } => {
            let mut args = vec![DynSolValue::Uint(amount, 256)];
            if let Some(token) = token {
                args.push(DynSolValue::Address(token));
            }
            let mut opts = TransactOpts::default();
            if let Some(fee) = fee {
                opts = opts.with_value(fee);
            }
            submit("redeem", args, opts).await
        }
        Commands::Watch { from_block } => watch(from_block).await,
        Commands::Deploy { kind, args } => deploy(kind, &args).await,
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = if verbose {
        "debug"
    } else {
        "info,lockredeem_bindings=debug"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}

fn print_selectors(kind: Option<ContractKind>) -> Result<()> {
    let kinds = match kind {
        Some(kind) => vec![kind],
        None => ContractKind::ALL.to_vec(),
    };

    for kind in kinds {
        kind.verify_func_sigs()
            .wrap_err_with(|| format!("Selector table of {} is inconsistent", kind))?;

        println!("{} ({})", kind, kind.contract_name());
        for (selector, signature) in kind.func_sigs() {
            println!("  {}  {}", selector, signature);
        }
        for event in kind.abi().events() {
            println!("  {}  {}", event.selector(), event.signature());
        }
    }
    Ok(())
}

fn decode_calldata(kind: ContractKind, data: &str) -> Result<()> {
    let bytes = hex::decode(data.trim().trim_start_matches("0x"))
        .map_err(|e| eyre!("Invalid calldata hex: {}", e))?;
    let binding = lockredeem_bindings::BoundContract::from_kind(Address::ZERO, kind, ());
    let (function, args) = binding.decode_input(&bytes)?;

    println!(
        "{} ({})",
        function.signature(),
        selector_hex(function.selector().0)
    );
    for (param, value) in function.inputs.iter().zip(&args) {
        println!("  {} {} = {:?}", param.ty, param.name, value);
    }
    Ok(())
}

async fn connect(config: &Config) -> Result<EvmClient> {
    EvmClient::connect(&config.client_config())
        .await
        .wrap_err("Failed to connect to EVM node")
}

async fn status() -> Result<()> {
    let config = Config::load()?;
    let client = connect(&config).await?;

    let block = client.block_number().await?;
    info!(chain_id = client.chain_id(), block, "Connected");

    let Some(address) = config.bridge_address else {
        info!("No LOCK_REDEEM_ADDRESS configured");
        return Ok(());
    };

    let bridge = client.bind_kind(address, config.bridge_kind);
    let opts = CallOpts::default();

    for view in ["numValidators", "votingThreshold", "getTotalEthBalance", "isActive"] {
        if bridge.function(view).is_err() {
            continue;
        }
        let values = bridge.call(view, &[], &opts).await?;
        info!(bridge = %address, kind = %config.bridge_kind, "{} = {:?}", view, values);
    }

    if let Some(signer) = client.signer_address() {
        let balance = client.balance(signer).await?;
        info!(signer = %signer, balance = %balance, "Signer");
        if bridge.function("isValidator").is_ok() {
            let values = bridge
                .call("isValidator", &[DynSolValue::Address(signer)], &opts)
                .await?;
            info!(signer = %signer, "isValidator = {:?}", values);
        }
    }
    Ok(())
}

async fn submit(function: &str, args: Vec<DynSolValue>, opts: TransactOpts) -> Result<()> {
    let config = Config::load()?;
    let client = connect(&config).await?;
    let signer = client.require_signer()?;
    let bridge = client.bind_kind(config.require_bridge()?, config.bridge_kind);

    let opts = TransactOpts {
        from: Some(signer),
        ..opts
    };
    let pending = bridge.transact(function, &args, &opts).await?;
    let tx_hash = *pending.tx_hash();

    let receipt = client
        .wait_for_finality(tx_hash, config.confirmations, config.tx_timeout())
        .await?;
    info!(
        tx_hash = %tx_hash,
        block = ?receipt.block_number,
        gas_used = receipt.gas_used,
        "{} final",
        function
    );
    Ok(())
}

async fn watch(from_block: Option<u64>) -> Result<()> {
    let config = Config::load()?;
    let client = connect(&config).await?;
    let address = config.require_bridge()?;

    let decoder = BridgeEvents::new(config.bridge_kind)?;
    let mut events = client
        .watcher(config.watcher_config())
        .watch(address, decoder, from_block);

    let (shutdown_tx, mut shutdown_rx) = tokio::sync::mpsc::channel::<()>(1);
    tokio::spawn(async move {
        wait_for_shutdown_signal().await;
        let _ = shutdown_tx.send(()).await;
    });

    loop {
        tokio::select! {
            _ = shutdown_rx.recv() => {
                events.close();
                break;
            }
            next = events.next() => match next {
                Some(log) => {
                    info!(
                        block = ?log.block_number,
                        tx_hash = ?log.tx_hash,
                        removed = log.removed,
                        "{}",
                        serde_json::to_string(&log.event)?
                    );
                }
                None => break,
            }
        }
    }

    if let Some(err) = events.take_error() {
        return Err(eyre!("Event stream failed: {}", err));
    }
    info!("Watch stopped");
    Ok(())
}

async fn deploy(kind: ContractKind, args: &[String]) -> Result<()> {
    let abi = kind.abi();
    let values = match abi.constructor() {
        Some(constructor) => coerce_args(&constructor.inputs, args)?,
        None if args.is_empty() => vec![],
        None => return Err(eyre!("{} takes no constructor arguments", kind)),
    };

    let config = Config::load()?;
    let client = connect(&config).await?;
    let signer = client.require_signer()?;

    let opts = TransactOpts {
        from: Some(signer),
        ..Default::default()
    };
    let (binding, tx_hash) = deploy_kind(client.provider().clone(), kind, &values, &opts).await?;
    info!(
        kind = %kind,
        address = %binding.address(),
        tx_hash = %tx_hash,
        "Deployed"
    );
    println!("{}", binding.address());
    Ok(())
}

async fn wait_for_shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        }
    }
}
