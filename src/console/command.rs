use crate::error::{FleetError, Result};
use std::fmt;
use std::str::FromStr;

/// Commands offered by the interactive menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    List,
    LowBattery,
    GoodChargeBrands,
    TotalConsumption,
    ChargeOne,
    Exit,
}

impl MenuCommand {
    /// All commands in menu order
    pub const ALL: [Self; 6] = [
        Self::List,
        Self::LowBattery,
        Self::GoodChargeBrands,
        Self::TotalConsumption,
        Self::ChargeOne,
        Self::Exit,
    ];

    /// Number shown in the menu
    pub const fn number(self) -> u8 {
        match self {
            Self::List => 1,
            Self::LowBattery => 2,
            Self::GoodChargeBrands => 3,
            Self::TotalConsumption => 4,
            Self::ChargeOne => 5,
            Self::Exit => 6,
        }
    }

    /// Short word accepted in place of the number
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::LowBattery => "low",
            Self::GoodChargeBrands => "brands",
            Self::TotalConsumption => "total",
            Self::ChargeOne => "charge",
            Self::Exit => "exit",
        }
    }
}

impl FromStr for MenuCommand {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim().to_lowercase();
        if matches!(input.as_str(), "quit" | "q") {
            return Ok(Self::Exit);
        }
        Self::ALL
            .into_iter()
            .find(|cmd| input == cmd.number().to_string() || input == cmd.keyword())
            .ok_or_else(|| FleetError::input(format!("Unknown option '{}'", s.trim())))
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_keywords() {
        for cmd in MenuCommand::ALL {
            assert_eq!(cmd.number().to_string().parse::<MenuCommand>().unwrap(), cmd);
            assert_eq!(cmd.keyword().parse::<MenuCommand>().unwrap(), cmd);
        }
    }

    #[test]
    fn ignores_case_and_whitespace() {
        assert_eq!(" LIST \n".parse::<MenuCommand>().unwrap(), MenuCommand::List);
        assert_eq!("Q".parse::<MenuCommand>().unwrap(), MenuCommand::Exit);
    }

    #[test]
    fn rejects_unknown_input() {
        for bad in ["", "0", "7", "chargeall", "1 2"] {
            let err = bad.parse::<MenuCommand>().unwrap_err();
            assert!(matches!(err, FleetError::Input { .. }));
        }
    }
}
