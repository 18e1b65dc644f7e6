//! Roll use cases.
//!
//! Attack rolls, saving throws, ability checks and weapon attacks made
//! against an actor's freshly derived statistics.

mod error;

#[cfg(test)]
mod tests;

pub use error::RollError;

use std::sync::Arc;

use add2e_domain::{
    Ability, AbilityCheck, AttackRoll, RandomPort, SaveCategory, SavingThrowRoll, WeaponAttack,
};

use super::character_sheet::CharacterSheetUseCases;

/// Container for roll use cases.
#[derive(Clone)]
pub struct RollUseCases {
    sheets: CharacterSheetUseCases,
    random: Arc<dyn RandomPort>,
}

impl RollUseCases {
    pub fn new(sheets: CharacterSheetUseCases, random: Arc<dyn RandomPort>) -> Self {
        Self { sheets, random }
    }

    /// d20 attack roll against THAC0.
    pub fn attack(&self, json: &str) -> Result<AttackRoll, RollError> {
        let sheet = self.sheets.derived_sheet(json)?;
        let attack = AttackRoll::roll(&sheet.derived, self.random.as_ref());
        tracing::info!(
            actor = %sheet.actor.document.display_name(),
            roll = attack.roll,
            thac0 = attack.thac0,
            hits_ac = attack.hits_ac,
            "Attack roll"
        );
        Ok(attack)
    }

    /// d20 saving throw; succeeds at or under the target.
    pub fn saving_throw(
        &self,
        json: &str,
        category: SaveCategory,
    ) -> Result<SavingThrowRoll, RollError> {
        let sheet = self.sheets.derived_sheet(json)?;
        let save = SavingThrowRoll::roll(&sheet.derived, category, self.random.as_ref());
        tracing::info!(
            actor = %sheet.actor.document.display_name(),
            category = %category,
            roll = save.roll,
            target = save.target,
            success = save.success,
            "Saving throw"
        );
        Ok(save)
    }

    /// d20 plus the ability's modifier.
    pub fn ability_check(&self, json: &str, ability: Ability) -> Result<AbilityCheck, RollError> {
        let sheet = self.sheets.derived_sheet(json)?;
        let check = AbilityCheck::roll(&sheet.derived, ability, self.random.as_ref());
        tracing::info!(
            actor = %sheet.actor.document.display_name(),
            ability = %ability,
            roll = check.roll,
            total = check.total,
            "Ability check"
        );
        Ok(check)
    }

    /// Attack with a named weapon item, then roll its damage.
    pub fn weapon_attack(&self, json: &str, item_name: &str) -> Result<WeaponAttack, RollError> {
        let sheet = self.sheets.derived_sheet(json)?;
        let item = sheet
            .actor
            .item(item_name)
            .ok_or_else(|| RollError::ItemNotFound(item_name.to_string()))?;
        let weapon = item
            .as_weapon()
            .ok_or_else(|| RollError::NotAWeapon(item.name.clone()))?;

        let attack = WeaponAttack::roll(&sheet.derived, weapon, self.random.as_ref());
        tracing::info!(
            actor = %sheet.actor.document.display_name(),
            weapon = %item.name,
            hits_ac = attack.attack.hits_ac,
            damage = %attack.damage.breakdown(),
            "Weapon attack"
        );
        Ok(attack)
    }
}
