#![forbid(unsafe_code)]

use clap::Parser;
use colored::*;
use comfy_table::Table;
use stakesim::config;
use stakesim::display;
use stakesim::error::SimError;
use stakesim::network::Network;
use stakesim::sandbox::Sandbox;
use stakesim::token;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Network panel to start on
    #[arg(long, default_value = "evm")]
    network: String,

    /// Path to the config file
    #[arg(long, default_value = "config.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut active = Network::parse(&cli.network)
        .ok_or_else(|| format!("Unknown network '{}'", cli.network))?;

    let config = config::load_config_from(&cli.config)?;
    let sandbox = Sandbox::new(&config);

    print_banner(&sandbox).await;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("{}", format!("{}> ", active.label().to_lowercase()).bright_cyan());
        std::io::stdout().flush()?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };

        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(cmd) => cmd.to_lowercase(),
            None => continue,
        };
        let rest = parts.collect::<Vec<_>>().join(" ");

        match command.as_str() {
            "use" => match Network::parse(&rest) {
                Some(network) => {
                    active = network;
                    println!("Switched to the {} panel.", network.label().bright_white());
                }
                None => println!("{}", "Usage: use <evm|solana>".yellow()),
            },
            "stake" => run_stake(&sandbox, active, &rest).await,
            "unstake" => run_unstake(&sandbox, active, &rest).await,
            "reward" => run_reward(&sandbox, active, &rest).await,
            "register" => run_register(&sandbox, active, &rest).await,
            "activate" => run_set_active(&sandbox, active, true).await,
            "deactivate" => run_set_active(&sandbox, active, false).await,
            "node" => run_node_lookup(&sandbox, active, &rest).await,
            "balance" => {
                let state = sandbox.handler(active).snapshot().await;
                println!("{}", display::format_balance(state.balance));
            }
            "staked" => {
                let state = sandbox.handler(active).snapshot().await;
                println!("{}", display::format_staked(state.staked));
            }
            "status" => print_status(&sandbox).await,
            "snapshot" => match sandbox.snapshot_json().await {
                Ok(json) => println!("{}", json),
                Err(e) => alert(&e),
            },
            "help" => print_help(),
            "quit" | "exit" => break,
            other => {
                println!(
                    "{} Type {} for the command list.",
                    format!("Unknown command '{}'.", other).yellow(),
                    "help".bright_white()
                );
            }
        }
    }

    Ok(())
}

async fn print_banner(sandbox: &Sandbox) {
    println!("{}", "stakesim console".bright_cyan().bold());
    println!("{}", "----------------".bright_cyan());
    for report in sandbox.bootstrap().await {
        println!();
        println!("{}", format!("[{}]", report.network).bright_green());
        println!("  {}", report.balance_line);
        println!("  {}", report.staked_line);
        println!("  Node lookup: {}", report.lookup_placeholder.italic());
    }
    println!();
    println!(
        "Type {} for commands, {} to switch panels.",
        "help".bright_white(),
        "use <evm|solana>".bright_white()
    );
}

async fn run_stake(sandbox: &Sandbox, network: Network, input: &str) {
    let amount = match token::parse_amount(input) {
        Ok(amount) => amount,
        Err(e) => return alert(&e),
    };
    match sandbox.handler(network).stake(amount).await {
        Ok(receipt) => {
            println!("{}", "Stake successful!".bright_green());
            println!("{}", display::format_balance(receipt.balance));
            println!("{}", display::format_staked(receipt.staked));
        }
        Err(e) => alert(&e),
    }
}

async fn run_unstake(sandbox: &Sandbox, network: Network, input: &str) {
    let amount = match token::parse_amount(input) {
        Ok(amount) => amount,
        Err(e) => return alert(&e),
    };
    match sandbox.handler(network).unstake(amount).await {
        Ok(receipt) => {
            println!("{}", "Unstake successful!".bright_green());
            println!("{}", display::format_balance(receipt.balance));
            println!("{}", display::format_staked(receipt.staked));
        }
        Err(e) => alert(&e),
    }
}

async fn run_reward(sandbox: &Sandbox, network: Network, input: &str) {
    let amount = match token::parse_amount(input) {
        Ok(amount) => amount,
        Err(e) => return alert(&e),
    };
    match sandbox.handler(network).earn_reward(amount).await {
        Ok(receipt) => {
            println!("{}", "Reward claimed!".bright_green());
            println!("{}", display::format_balance(receipt.balance));
        }
        Err(e) => alert(&e),
    }
}

async fn run_register(sandbox: &Sandbox, network: Network, node_type: &str) {
    match sandbox.handler(network).register_node(node_type).await {
        Ok(receipt) => {
            println!(
                "{}",
                format!(
                    "Node registered for your {}: {}. Please activate it.",
                    network.key_noun(),
                    receipt.owner
                )
                .bright_green()
            );
        }
        Err(e) => alert(&e),
    }
}

async fn run_set_active(sandbox: &Sandbox, network: Network, active: bool) {
    match sandbox.handler(network).set_node_active(active).await {
        Ok(_) => {
            let message = if active {
                "Node activated!"
            } else {
                "Node deactivated!"
            };
            println!("{}", message.bright_green());
        }
        Err(e) => alert(&e),
    }
}

async fn run_node_lookup(sandbox: &Sandbox, network: Network, owner: &str) {
    if !owner.trim().is_empty() {
        println!("Processing...");
    }
    match sandbox.handler(network).node_info(owner).await {
        Ok(record) => {
            println!(
                "{}",
                display::format_node_info(record.as_ref(), network.key_noun())
            );
        }
        Err(e) => alert(&e),
    }
}

async fn print_status(sandbox: &Sandbox) {
    let mut table = Table::new();
    table.set_header(vec!["Network", "Balance", "Staked", "Registered Nodes"]);
    for network in [Network::Evm, Network::Solana] {
        let state = sandbox.handler(network).snapshot().await;
        table.add_row(vec![
            network.label().to_string(),
            format!("{:.2}", state.balance),
            format!("{:.2}", state.staked),
            state.nodes.len().to_string(),
        ]);
    }
    println!("{table}");
}

fn print_help() {
    println!("{}", "Commands:".bright_green().underline());
    println!("  {}    Stake tokens from the spendable balance", "stake <amount>".bright_white());
    println!("  {}  Unstake tokens back to the balance", "unstake <amount>".bright_white());
    println!("  {}   Claim a simulated minted reward", "reward <amount>".bright_white());
    println!("  {}  Register your node with a role label", "register <type>".bright_white());
    println!("  {}         Activate your registered node", "activate".bright_white());
    println!("  {}       Deactivate your registered node", "deactivate".bright_white());
    println!("  {}     Look up a node by owner key", "node <owner>".bright_white());
    println!("  {}          Show the spendable balance", "balance".bright_white());
    println!("  {}           Show the staked amount", "staked".bright_white());
    println!("  {}           Show both networks side by side", "status".bright_white());
    println!("  {}         JSON dump of the session state", "snapshot".bright_white());
    println!("  {}  Switch the active panel", "use <evm|solana>".bright_white());
    println!("  {}             Leave the sandbox", "quit".bright_white());
}

fn alert(error: &SimError) {
    println!("{}", error.to_string().yellow());
}
