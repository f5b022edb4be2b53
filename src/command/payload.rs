//! Strategy profiles and the quota-set command envelope.
//!
//! The envelope mirrors the fixed JSON shape accepted by the device quota
//! endpoint. Field names are camelCase on the wire.

use serde::Serialize;

/// Backup reserve applied with the self-powered strategy, in percent.
pub const SELF_POWERED_BACKUP_RESERVE_SOC: u8 = 70;

/// Backup reserve applied with the time-of-use strategy, in percent.
pub const TOU_BACKUP_RESERVE_SOC: u8 = 45;

/// Protocol constants of the energy-strategy command.
pub mod protocol {
    /// Command identifier.
    pub const CMD_ID: u32 = 17;
    /// Destination direction.
    pub const DIR_DEST: u32 = 1;
    /// Source direction.
    pub const DIR_SRC: u32 = 1;
    /// Command function.
    pub const CMD_FUNC: u32 = 254;
    /// Destination module.
    pub const DEST: u32 = 2;
    /// Whether the device acknowledges the command.
    pub const NEED_ACK: bool = true;
}

/// Operating strategy plus its backup-reserve threshold.
///
/// Self-powered and time-of-use are mutually exclusive; only one flag is
/// stored and the other is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyProfile {
    self_powered: bool,
}

impl StrategyProfile {
    /// Self-powered operation with a 70% backup reserve.
    #[must_use]
    pub const fn self_powered() -> Self {
        Self { self_powered: true }
    }

    /// Time-of-use operation with a 45% backup reserve.
    #[must_use]
    pub const fn time_of_use() -> Self {
        Self {
            self_powered: false,
        }
    }

    #[must_use]
    pub const fn self_powered_enabled(self) -> bool {
        self.self_powered
    }

    #[must_use]
    pub const fn tou_mode_enabled(self) -> bool {
        !self.self_powered
    }

    /// State of charge below which the battery is held in reserve.
    #[must_use]
    pub const fn backup_reserve_start_soc(self) -> u8 {
        if self.self_powered {
            SELF_POWERED_BACKUP_RESERVE_SOC
        } else {
            TOU_BACKUP_RESERVE_SOC
        }
    }
}

/// Request body for the set-parameter operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandEnvelope {
    pub sn: String,
    pub cmd_id: u32,
    pub dir_dest: u32,
    pub dir_src: u32,
    pub cmd_func: u32,
    pub dest: u32,
    pub need_ack: bool,
    pub params: StrategyParams,
}

/// The `params` object of a [`CommandEnvelope`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyParams {
    pub cfg_energy_backup: EnergyBackup,
    pub cfg_energy_strategy_operate_mode: OperateMode,
}

/// Backup reserve settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyBackup {
    pub energy_backup_start_soc: u8,
    pub energy_backup_en: bool,
}

/// Operating strategy flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperateMode {
    pub operate_self_powered_open: bool,
    pub operate_tou_mode_open: bool,
}

/// Builds the set-parameter envelope for `serial_number` and `profile`.
///
/// Pure: identical inputs always produce equal envelopes.
#[must_use]
pub fn build(serial_number: &str, profile: StrategyProfile) -> CommandEnvelope {
    CommandEnvelope {
        sn: serial_number.to_string(),
        cmd_id: protocol::CMD_ID,
        dir_dest: protocol::DIR_DEST,
        dir_src: protocol::DIR_SRC,
        cmd_func: protocol::CMD_FUNC,
        dest: protocol::DEST,
        need_ack: protocol::NEED_ACK,
        params: StrategyParams {
            cfg_energy_backup: EnergyBackup {
                energy_backup_start_soc: profile.backup_reserve_start_soc(),
                energy_backup_en: true,
            },
            cfg_energy_strategy_operate_mode: OperateMode {
                operate_self_powered_open: profile.self_powered_enabled(),
                operate_tou_mode_open: profile.tou_mode_enabled(),
            },
        },
    }
}
