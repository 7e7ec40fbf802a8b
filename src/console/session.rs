//! Interactive game session.
//!
//! The session is a small state machine:
//!
//! ```text
//! CollectCard(First) -> CollectCard(Second) -> DisplayBoth -> MenuPrompt
//!     -> ShowResult(attr) -> AskContinue -> MenuPrompt | Terminate
//! ```
//!
//! Each call to [`Session::step`] performs the I/O of the current stage and
//! moves to the next one. [`Session::run`] steps until `Terminate`, prints
//! the closing message and returns a report of the game.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::cards::CityCard;
use crate::core::{CardSlot, SessionError, TrunfoConfig};
use crate::rules::{judge, Attribute, Verdict};

use super::input::Prompter;
use super::render;

pub const POPULATION_PROMPT: &str = "População (habitantes): ";
pub const AREA_PROMPT: &str = "Área (km²): ";
pub const GDP_PROMPT: &str = "PIB (em bilhões): ";

/// Session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    CollectCard(CardSlot),
    DisplayBoth,
    MenuPrompt,
    ShowResult(Attribute),
    AskContinue,
    Terminate,
}

/// One comparison played during the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Round {
    pub attribute: Attribute,
    pub verdict: Verdict,
}

/// Everything a finished session produced.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionReport {
    pub first: CityCard,
    pub second: CityCard,
    pub rounds: Vec<Round>,
}

impl SessionReport {
    /// The card held in `slot`.
    #[must_use]
    pub fn card(&self, slot: CardSlot) -> &CityCard {
        match slot {
            CardSlot::First => &self.first,
            CardSlot::Second => &self.second,
        }
    }

    /// Number of rounds won by `slot`.
    #[must_use]
    pub fn wins(&self, slot: CardSlot) -> usize {
        self.rounds.iter().filter(|r| r.verdict.is_winner(slot)).count()
    }

    /// Number of tied rounds.
    #[must_use]
    pub fn ties(&self) -> usize {
        self.rounds.iter().filter(|r| r.verdict == Verdict::Tie).count()
    }
}

/// Interactive session over a line reader and a writer.
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    config: TrunfoConfig,
    stage: Stage,
    first: Option<CityCard>,
    second: Option<CityCard>,
    rounds: Vec<Round>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: TrunfoConfig) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            config,
            stage: Stage::CollectCard(CardSlot::First),
            first: None,
            second: None,
            rounds: Vec::new(),
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Get a collected card.
    #[must_use]
    pub fn card(&self, slot: CardSlot) -> Option<&CityCard> {
        match slot {
            CardSlot::First => self.first.as_ref(),
            CardSlot::Second => self.second.as_ref(),
        }
    }

    fn pair<'a>(
        first: &'a Option<CityCard>,
        second: &'a Option<CityCard>,
        stage: &'static str,
    ) -> Result<(&'a CityCard, &'a CityCard), SessionError> {
        match (first, second) {
            (Some(first), Some(second)) => Ok((first, second)),
            _ => Err(SessionError::CardsMissing { stage }),
        }
    }

    /// Run the current stage and advance. Returns the new stage.
    ///
    /// Stepping in `Terminate` does nothing.
    pub fn step(&mut self) -> Result<Stage, SessionError> {
        let next = match self.stage {
            Stage::CollectCard(slot) => {
                let card = self.collect_card(slot)?;
                debug!(%slot, code = %card.code, name = %card.name, "card collected");
                match slot {
                    CardSlot::First => {
                        self.first = Some(card);
                        Stage::CollectCard(CardSlot::Second)
                    }
                    CardSlot::Second => {
                        self.second = Some(card);
                        Stage::DisplayBoth
                    }
                }
            }
            Stage::DisplayBoth => {
                let (first, second) = Self::pair(&self.first, &self.second, "display")?;
                render::write_cards(self.prompter.output(), first, second)?;
                Stage::MenuPrompt
            }
            Stage::MenuPrompt => {
                render::write_menu(self.prompter.output())?;
                Stage::ShowResult(self.prompter.read_attribute()?)
            }
            Stage::ShowResult(attribute) => {
                let (first, second) = Self::pair(&self.first, &self.second, "comparison")?;
                let verdict = judge(first, second, attribute);
                info!(?attribute, ?verdict, "round judged");
                render::write_verdict(self.prompter.output(), verdict, first, second)?;
                self.rounds.push(Round { attribute, verdict });
                Stage::AskContinue
            }
            Stage::AskContinue => {
                if self.prompter.read_confirm(render::CONTINUE_PROMPT)? {
                    Stage::MenuPrompt
                } else {
                    Stage::Terminate
                }
            }
            Stage::Terminate => Stage::Terminate,
        };

        self.stage = next;
        Ok(next)
    }

    fn collect_card(&mut self, slot: CardSlot) -> Result<CityCard, SessionError> {
        render::write_collect_header(self.prompter.output(), slot)?;

        let config = &self.config;
        let p = &mut self.prompter;

        let region = p.read_region()?;
        let code = p.read_code()?;
        let name = p.read_name(config.name_min_len, config.name_max_len)?;
        let population = p.read_int(POPULATION_PROMPT, config.population.min, config.population.max)?;
        let area_km2 = p.read_decimal(AREA_PROMPT, config.area_km2.min, config.area_km2.max)?;
        let gdp_billions =
            p.read_decimal(GDP_PROMPT, config.gdp_billions.min, config.gdp_billions.max)?;

        Ok(CityCard::new(region, code, name, population, area_km2, gdp_billions))
    }

    /// Play the whole session and print the closing message.
    pub fn run(mut self) -> Result<SessionReport, SessionError> {
        while self.stage != Stage::Terminate {
            self.step()?;
        }

        render::write_farewell(self.prompter.output())?;
        info!(rounds = self.rounds.len(), "session finished");

        match (self.first, self.second) {
            (Some(first), Some(second)) => Ok(SessionReport {
                first,
                second,
                rounds: self.rounds,
            }),
            _ => Err(SessionError::CardsMissing { stage: "report" }),
        }
    }
}
