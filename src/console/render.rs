//! Screen text for the game: headers, card sheets, menu, results.

use std::io::{self, Write};

use crate::cards::CityCard;
use crate::core::CardSlot;
use crate::rules::{Attribute, Direction, Verdict};

pub const CONTINUE_PROMPT: &str = "\nDeseja comparar outro atributo? (S/N): ";

pub fn write_collect_header(out: &mut impl Write, slot: CardSlot) -> io::Result<()> {
    if slot == CardSlot::Second {
        writeln!(out)?;
    }
    writeln!(out, "===== Cadastro da Carta {} =====", slot.number())
}

/// Card sheet with raw fields and derived metrics.
pub fn write_card(out: &mut impl Write, card: &CityCard) -> io::Result<()> {
    writeln!(out, "\n--- CARTA {} ({}) ---", card.code, card.region)?;
    writeln!(out, "Cidade:         {}", card.name)?;
    writeln!(out, "População:      {} hab", card.population)?;
    writeln!(out, "Área:           {:.2} km²", card.area_km2)?;
    writeln!(out, "PIB:            {:.3} bilhões", card.gdp_billions)?;
    writeln!(out, "Densidade:      {:.2} hab/km²", card.density())?;
    writeln!(out, "PIB per capita: R$ {:.2}", card.gdp_per_capita())
}

pub fn write_cards(out: &mut impl Write, first: &CityCard, second: &CityCard) -> io::Result<()> {
    writeln!(out, "\n===== Cartas Cadastradas =====")?;
    write_card(out, first)?;
    write_card(out, second)
}

pub fn write_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n=== Escolha o atributo para comparar ===")?;
    for attr in Attribute::ALL {
        let rule = match attr.direction() {
            Direction::HigherWins => "MAIOR vence",
            Direction::LowerWins => "MENOR vence",
        };
        writeln!(out, "{}) {} ({})", attr.selector(), attr.label(), rule)?;
    }
    Ok(())
}

pub fn write_verdict(
    out: &mut impl Write,
    verdict: Verdict,
    first: &CityCard,
    second: &CityCard,
) -> io::Result<()> {
    write!(out, "\n>>> Resultado: ")?;
    match verdict {
        Verdict::Winner(slot) => {
            let code = match slot {
                CardSlot::First => &first.code,
                CardSlot::Second => &second.code,
            };
            writeln!(out, "{slot} ({code}) VENCEU no critério escolhido!")
        }
        Verdict::Tie => writeln!(out, "EMPATE no critério escolhido!"),
    }
}

pub fn write_farewell(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nObrigado! Encerrando.")?;
    out.flush()
}
