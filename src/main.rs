// Copyright (c) Alberto Sonnino
// SPDX-License-Identifier: Apache-2.0

use clap::{command, Parser};
use colored::Colorize;
use eyre::{eyre, Result};
use num_bigint::BigInt;
use prettytable::{row, Table};
use shamirs::{algebra, reconstruct, split, Share};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    operation: Operation,
}

#[derive(Parser)]
enum Operation {
    /// Split a secret into shares
    Split {
        #[clap(short, long, value_name = "INT")]
        secret: BigInt,
        #[clap(short, long, value_name = "INT")]
        n: u64,
        /// Defaults to the number of shares
        #[clap(short, long, value_name = "INT")]
        t: Option<u64>,
        /// Prime modulus; defaults to 2^127 - 1
        #[clap(short, long, value_name = "INT")]
        modulus: Option<BigInt>,
    },

    Reconstruct {
        /// Base64 shares: "SHARE_1,SHARE_2,..."
        #[clap(short, long, value_name = "[STR]", value_delimiter = ',', num_args(1..))]
        shares: Vec<Share>,
        /// Defaults to the number of shares
        #[clap(short, long, value_name = "INT")]
        t: Option<usize>,
    },

    /// Add shares that carry the same index
    Add {
        #[clap(short, long, value_name = "[STR]", value_delimiter = ',', num_args(1..))]
        shares: Vec<Share>,
    },

    /// Multiply a share by a nonnegative scalar
    Scale {
        #[clap(short, long, value_name = "STR")]
        share: Share,
        #[clap(short = 'k', long, value_name = "INT")]
        scalar: BigInt,
    },
}

fn print_shares(shares: &[Share]) {
    let mut table = Table::new();
    table.set_titles(row!["Index", "Share"]);
    for share in shares {
        table.add_row(row![share.index(), share.to_text()]);
    }
    table.printstd();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    match args.operation {
        Operation::Split {
            secret,
            n,
            t,
            modulus,
        } => {
            let shares = split(&secret, n, modulus.as_ref(), t)?;
            if let Some(advisory) = shares.advisory() {
                eprintln!("{} {}", "warning:".yellow().bold(), advisory);
            }
            print_shares(shares.shares());
        }
        Operation::Reconstruct { shares, t } => {
            let secret = reconstruct(&shares, t)?;
            println!("{}", secret.to_string().green());
        }
        Operation::Add { shares } => {
            let total = algebra::sum(&shares)?.ok_or_else(|| eyre!("No shares to add"))?;
            print_shares(&[total]);
        }
        Operation::Scale { share, scalar } => {
            let scaled = algebra::scalar_multiply(&share, &scalar)?;
            print_shares(&[scaled]);
        }
    }

    Ok(())
}
