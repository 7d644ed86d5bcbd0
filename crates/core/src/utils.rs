//! Utils

use clap::{Parser, ValueEnum};

use crate::projection::{Direction, Sort, SortKey};

/// Arguments for the storefront examples
#[derive(Debug, Parser)]
pub struct ExampleStorefrontArgs {
    /// Search query to filter the catalog with
    #[clap(short, long, default_value = "")]
    pub query: String,

    /// Attribute to sort the catalog by
    #[clap(short, long)]
    pub sort: Option<SortArg>,

    /// Sort direction
    #[clap(short, long, default_value = "asc")]
    pub direction: DirectionArg,
}

impl ExampleStorefrontArgs {
    /// The sort selection these arguments describe, if any.
    #[must_use]
    pub fn sort_selection(&self) -> Option<Sort> {
        self.sort.map(|key| Sort {
            key: key.into(),
            direction: self.direction.into(),
        })
    }
}

/// Sortable attribute, as spelled on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    /// Sort by subject
    Subject,

    /// Sort by location
    Location,

    /// Sort by price
    Price,

    /// Sort by remaining spaces
    Availability,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Subject => Self::Subject,
            SortArg::Location => Self::Location,
            SortArg::Price => Self::Price,
            SortArg::Availability => Self::Availability,
        }
    }
}

/// Sort direction, as spelled on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    /// Smallest first
    Asc,

    /// Largest first
    Desc,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Asc => Self::Ascending,
            DirectionArg::Desc => Self::Descending,
        }
    }
}
