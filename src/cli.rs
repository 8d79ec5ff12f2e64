use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::constants::NO_MAX;
use crate::domain::models::{MergeMode, Policy};

#[derive(Parser, Debug)]
#[command(
    name = "maskpolicy",
    version,
    about = "Validate password-guessing masks against a password policy"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Check {
        #[arg(required = true, help = "paths to the mask files to merge and check")]
        files: Vec<PathBuf>,
        #[command(flatten)]
        merge: MergeArgs,
        #[command(flatten)]
        bounds: BoundArgs,
    },
    Merge {
        #[arg(required = true, help = "paths to the mask files to merge")]
        files: Vec<PathBuf>,
        #[command(flatten)]
        merge: MergeArgs,
    },
    Inspect {
        #[arg(required = true, help = "masks to classify")]
        masks: Vec<String>,
    },
}

#[derive(Args, Debug)]
pub struct MergeArgs {
    #[arg(short, long, group = "mode", help = "perform a union")]
    pub union: bool,
    #[arg(short, long, group = "mode", help = "perform an intersection")]
    pub intersect: bool,
    #[arg(short, long, group = "mode", help = "perform a symmetric difference")]
    pub difference: bool,
    #[arg(short, long, help = "sort the merged entries")]
    pub sort: bool,
    #[arg(short, long, help = "write the resulting lines to a file")]
    pub out_file: Option<PathBuf>,
}

impl MergeArgs {
    pub fn mode(&self) -> MergeMode {
        if self.intersect {
            MergeMode::Intersect
        } else if self.difference {
            MergeMode::Difference
        } else {
            MergeMode::Union
        }
    }
}

#[derive(Args, Debug)]
pub struct BoundArgs {
    #[arg(
        long,
        default_value_t = 0,
        value_name = "INT",
        help = "minimum number of lower case characters"
    )]
    pub min_lower: i64,
    #[arg(
        long,
        default_value_t = NO_MAX,
        allow_negative_numbers = true,
        value_name = "INT",
        help = "maximum number of lower case characters"
    )]
    pub max_lower: i64,
    #[arg(
        long,
        default_value_t = 0,
        value_name = "INT",
        help = "minimum number of upper case characters"
    )]
    pub min_upper: i64,
    #[arg(
        long,
        default_value_t = NO_MAX,
        allow_negative_numbers = true,
        value_name = "INT",
        help = "maximum number of upper case characters"
    )]
    pub max_upper: i64,
    #[arg(
        long,
        default_value_t = 0,
        value_name = "INT",
        help = "minimum number of digits"
    )]
    pub min_digit: i64,
    #[arg(
        long,
        default_value_t = NO_MAX,
        allow_negative_numbers = true,
        value_name = "INT",
        help = "maximum number of digits"
    )]
    pub max_digit: i64,
    #[arg(
        long,
        default_value_t = 0,
        value_name = "INT",
        help = "minimum number of special characters"
    )]
    pub min_special: i64,
    #[arg(
        long,
        default_value_t = NO_MAX,
        allow_negative_numbers = true,
        value_name = "INT",
        help = "maximum number of special characters"
    )]
    pub max_special: i64,
    #[arg(
        long,
        default_value_t = 8,
        value_name = "INT",
        help = "minimum password length"
    )]
    pub min_length: i64,
    #[arg(
        long,
        default_value_t = NO_MAX,
        allow_negative_numbers = true,
        value_name = "INT",
        help = "maximum password length"
    )]
    pub max_length: i64,
}

impl BoundArgs {
    pub fn to_policy(&self) -> Policy {
        Policy {
            min_lower: self.min_lower,
            max_lower: self.max_lower,
            min_upper: self.min_upper,
            max_upper: self.max_upper,
            min_digit: self.min_digit,
            max_digit: self.max_digit,
            min_special: self.min_special,
            max_special: self.max_special,
            min_length: self.min_length,
            max_length: self.max_length,
        }
    }
}
