// Licensed under the Apache-2.0 license

//! Decomposition of Flexcomm signal tags into peripheral role bindings.
//!
//! A Flexcomm pin function is named after every role it can play, in a fixed
//! order that the datasheet never spells out:
//!
//! ```text
//! FC3_RTS_SCL_SSEL1        → USART RTS, I2C SCL, SPI SSEL1
//! FC3_TXD_SCL_MISO_WS      → USART TXD, I2C SCL, SPI MISO, I2S WS
//! FC3_SCK                  → USART clock
//! FC3_SSEL2                → SPI SSEL2
//! ```
//!
//! [`SignalTag`] keeps the raw tokens; [`SignalTag::bindings`] applies the
//! positional convention and normalizes each token into a [`Role`].

use anyhow::{bail, Context, Result};
use std::fmt;

use crate::util::capitalize;

/// Peripheral kinds for three-role tags, by position.
const THREE_ROLE_ORDER: [PeripheralKind; 3] =
    [PeripheralKind::Usart, PeripheralKind::I2c, PeripheralKind::Spi];

/// Peripheral kinds for four-role tags, by position.
const FOUR_ROLE_ORDER: [PeripheralKind; 4] = [
    PeripheralKind::Usart,
    PeripheralKind::I2c,
    PeripheralKind::Spi,
    PeripheralKind::I2s,
];

/// The serial protocols a Flexcomm interface can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PeripheralKind {
    Usart,
    I2c,
    Spi,
    I2s,
}

impl PeripheralKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PeripheralKind::Usart => "USART",
            PeripheralKind::I2c => "I2C",
            PeripheralKind::Spi => "SPI",
            PeripheralKind::I2s => "I2S",
        }
    }
}

impl fmt::Display for PeripheralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numbered peripheral, e.g. `I2C1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeripheralInstance {
    pub kind: PeripheralKind,
    pub index: u8,
}

impl PeripheralInstance {
    /// Name of the HAL type for this instance (`I2c1`).
    pub fn type_name(&self) -> String {
        capitalize(&self.to_string())
    }
}

impl fmt::Display for PeripheralInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.index)
    }
}

/// Canonical name of a single signal line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Rx,
    Tx,
    Rts,
    Cts,
    Sclk,
    Scl,
    Sda,
    Miso,
    Mosi,
    Ssel0,
    Ssel1,
    Ssel2,
    Ssel3,
    Sck,
    Ws,
}

impl Role {
    /// Normalizes a raw datasheet token in the context of the peripheral it
    /// is bound to.
    ///
    /// Unknown tokens are an error rather than passed through, so a typo in
    /// the table cannot turn into a bogus trait name.
    pub fn normalize(kind: PeripheralKind, raw: &str) -> Result<Role> {
        use PeripheralKind::*;
        let role = match (kind, raw) {
            (_, "RXD") => Role::Rx,
            (_, "TXD") => Role::Tx,
            (I2s, "DATA") => Role::Sda,
            // A lone SCK is the USART clock pin.
            (Usart, "CLK") | (Usart, "SCK") => Role::Sclk,
            (_, "RTS") => Role::Rts,
            (_, "CTS") => Role::Cts,
            (_, "SCL") => Role::Scl,
            (_, "SDA") => Role::Sda,
            (_, "MISO") => Role::Miso,
            (_, "MOSI") => Role::Mosi,
            (_, "SSEL0") => Role::Ssel0,
            (_, "SSEL1") => Role::Ssel1,
            (_, "SSEL2") => Role::Ssel2,
            (_, "SSEL3") => Role::Ssel3,
            (_, "SCK") => Role::Sck,
            (_, "WS") => Role::Ws,
            _ => bail!("unknown {kind} role token {raw:?}"),
        };
        Ok(role)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Rx => "RX",
            Role::Tx => "TX",
            Role::Rts => "RTS",
            Role::Cts => "CTS",
            Role::Sclk => "SCLK",
            Role::Scl => "SCL",
            Role::Sda => "SDA",
            Role::Miso => "MISO",
            Role::Mosi => "MOSI",
            Role::Ssel0 => "SSEL0",
            Role::Ssel1 => "SSEL1",
            Role::Ssel2 => "SSEL2",
            Role::Ssel3 => "SSEL3",
            Role::Sck => "SCK",
            Role::Ws => "WS",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One role a pin function plays on one peripheral instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoleBinding {
    pub instance: PeripheralInstance,
    pub role: Role,
}

impl RoleBinding {
    /// Capability trait proving a pin can serve this role, e.g. `UsartRtsPin`.
    pub fn trait_name(&self) -> String {
        format!(
            "{}{}Pin",
            capitalize(self.instance.kind.as_str()),
            capitalize(self.role.as_str())
        )
    }

    /// Name of the `Pin` method that configures this role, e.g. `into_usart3_rts_pin`.
    pub fn method_name(&self) -> String {
        format!(
            "into_{}_{}_pin",
            self.instance.to_string().to_lowercase(),
            self.role.as_str().to_lowercase()
        )
    }
}

/// A decomposed signal tag such as `FC3_RTS_SCL_SSEL1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignalTag {
    /// Leading token, e.g. `FC3`.
    pub prefix: String,
    /// Flexcomm number, the last digit of `prefix`.
    pub peripheral_index: u8,
    /// Raw role tokens in datasheet order.
    pub roles: Vec<String>,
}

impl SignalTag {
    pub fn parse(tag: &str) -> Result<SignalTag> {
        let (prefix, kinds) = tag
            .split_once('_')
            .with_context(|| format!("signal tag {tag:?} has no role tokens"))?;
        let peripheral_index = prefix
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .with_context(|| {
                format!("signal tag {tag:?} does not start with a numbered peripheral")
            })? as u8;

        let roles: Vec<String> = kinds.split('_').map(str::to_string).collect();
        if roles.iter().any(|r| r.is_empty()) {
            bail!("signal tag {tag:?} has an empty role token");
        }
        match roles.len() {
            1 => {
                let lone = &roles[0];
                if !lone.starts_with("SSEL") && lone.as_str() != "SCK" {
                    bail!("single-role signal tag {tag:?} is neither SSELn nor SCK");
                }
            }
            3 | 4 => {}
            n => bail!(
                "signal tag {tag:?} has {} separators, expected 0, 2 or 3",
                n - 1
            ),
        }

        Ok(SignalTag {
            prefix: prefix.to_string(),
            peripheral_index,
            roles,
        })
    }

    /// Binds each raw token to its peripheral and normalizes it.
    pub fn bindings(&self) -> Result<Vec<RoleBinding>> {
        let kinds: &[PeripheralKind] = match self.roles.len() {
            1 if self.roles[0].starts_with("SSEL") => &[PeripheralKind::Spi],
            1 => &[PeripheralKind::Usart],
            3 => &THREE_ROLE_ORDER,
            4 => &FOUR_ROLE_ORDER,
            n => bail!("signal tag {} has {n} role tokens", self),
        };
        kinds
            .iter()
            .zip(&self.roles)
            .map(|(&kind, raw)| -> Result<RoleBinding> {
                let role = Role::normalize(kind, raw)
                    .with_context(|| format!("in signal tag {}", self))?;
                Ok(RoleBinding {
                    instance: PeripheralInstance {
                        kind,
                        index: self.peripheral_index,
                    },
                    role,
                })
            })
            .collect()
    }
}

impl fmt::Display for SignalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix)?;
        for role in &self.roles {
            write!(f, "_{role}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::default_entries;

    fn binding(kind: PeripheralKind, index: u8, role: Role) -> RoleBinding {
        RoleBinding {
            instance: PeripheralInstance { kind, index },
            role,
        }
    }

    #[test]
    fn test_three_role_tag() {
        let tag = SignalTag::parse("FC3_RTS_SCL_SSEL1").unwrap();
        assert_eq!(tag.prefix, "FC3");
        assert_eq!(tag.peripheral_index, 3);
        assert_eq!(tag.roles, ["RTS", "SCL", "SSEL1"]);
        assert_eq!(
            tag.bindings().unwrap(),
            [
                binding(PeripheralKind::Usart, 3, Role::Rts),
                binding(PeripheralKind::I2c, 3, Role::Scl),
                binding(PeripheralKind::Spi, 3, Role::Ssel1),
            ]
        );
    }

    #[test]
    fn test_four_role_tag_renames() {
        let tag = SignalTag::parse("FC7_RXD_SDA_MOSI_DATA").unwrap();
        assert_eq!(
            tag.bindings().unwrap(),
            [
                binding(PeripheralKind::Usart, 7, Role::Rx),
                binding(PeripheralKind::I2c, 7, Role::Sda),
                binding(PeripheralKind::Spi, 7, Role::Mosi),
                binding(PeripheralKind::I2s, 7, Role::Sda),
            ]
        );
        let tag = SignalTag::parse("FC0_TXD_SCL_MISO_WS").unwrap();
        let roles: Vec<Role> = tag.bindings().unwrap().iter().map(|b| b.role).collect();
        assert_eq!(roles, [Role::Tx, Role::Scl, Role::Miso, Role::Ws]);
    }

    #[test]
    fn test_single_role_tags() {
        let sck = SignalTag::parse("FC1_SCK").unwrap();
        assert_eq!(
            sck.bindings().unwrap(),
            [binding(PeripheralKind::Usart, 1, Role::Sclk)]
        );
        let ssel = SignalTag::parse("FC4_SSEL3").unwrap();
        assert_eq!(
            ssel.bindings().unwrap(),
            [binding(PeripheralKind::Spi, 4, Role::Ssel3)]
        );
    }

    #[test]
    fn test_rejects_malformed_tags() {
        assert!(SignalTag::parse("FC3").is_err());
        assert!(SignalTag::parse("FCx_SCK").is_err());
        assert!(SignalTag::parse("FC3_MCLK").is_err());
        assert!(SignalTag::parse("FC3_TXD_SCL").is_err());
        assert!(SignalTag::parse("FC3_A_B_C_D_E").is_err());
        assert!(SignalTag::parse("FC3__SCL_SSEL1").is_err());
    }

    #[test]
    fn test_unknown_role_token_is_an_error() {
        let tag = SignalTag::parse("FC3_RTS_SCL_FOO").unwrap();
        let err = tag.bindings().unwrap_err();
        assert!(format!("{err:#}").contains("FOO"));
        // DATA only has a meaning on I2S.
        assert!(Role::normalize(PeripheralKind::Spi, "DATA").is_err());
        assert!(Role::normalize(PeripheralKind::I2c, "CLK").is_err());
    }

    #[test]
    fn test_identifiers() {
        let b = binding(PeripheralKind::Usart, 3, Role::Rts);
        assert_eq!(b.trait_name(), "UsartRtsPin");
        assert_eq!(b.method_name(), "into_usart3_rts_pin");
        assert_eq!(b.instance.type_name(), "Usart3");
        let b = binding(PeripheralKind::I2c, 1, Role::Sda);
        assert_eq!(b.trait_name(), "I2cSdaPin");
        assert_eq!(b.method_name(), "into_i2c1_sda_pin");
        let b = binding(PeripheralKind::Spi, 4, Role::Ssel2);
        assert_eq!(b.trait_name(), "SpiSsel2Pin");
    }

    #[test]
    fn test_every_table_tag_reassembles() {
        for entry in default_entries().unwrap() {
            let tag = SignalTag::parse(&entry.signal_tag).unwrap();
            assert_eq!(tag.to_string(), entry.signal_tag);
            assert!(!tag.bindings().unwrap().is_empty());
        }
    }
}
