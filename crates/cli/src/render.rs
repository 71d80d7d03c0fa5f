use std::io::{self, Write};

use ivg_strutture::{FacilityRecord, Selection, ViewContent};

pub const LOADING: &str = "Caricamento dati in corso...";
pub const TITLE: &str = "Le strutture dove si effettuano IVG";
pub const SUBTITLE: &str = "Dati al 2023 - Fonte: Istat via Epicentro";
pub const SELECT_PROMPT: &str = "Scegli una provincia per visualizzare le strutture:";
pub const PLACEHOLDER: &str = "-- Seleziona una provincia --";
pub const NOT_FOUND: &str = "Nessuna struttura trovata per la provincia selezionata.";

pub fn loading(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", LOADING)
}

pub fn header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", SUBTITLE)?;
    writeln!(out)
}

/// The dropdown contents: the placeholder followed by every province.
/// With `numbered`, entries are prefixed by the index accepted as input.
pub fn province_options(
    out: &mut impl Write,
    provinces: &[String],
    selection: &Selection,
    numbered: bool,
) -> io::Result<()> {
    let options = std::iter::once((PLACEHOLDER, *selection == Selection::None)).chain(
        provinces
            .iter()
            .map(|province| (province.as_str(), selection.province() == Some(province.as_str()))),
    );

    for (idx, (label, selected)) in options.enumerate() {
        let marker = if selected { '*' } else { ' ' };
        if numbered {
            writeln!(out, "{} {:>3}) {}", marker, idx, label)?;
        } else {
            writeln!(out, "{}", label)?;
        }
    }
    Ok(())
}

pub fn facility_card(out: &mut impl Write, record: &FacilityRecord) -> io::Result<()> {
    writeln!(out, "{}", record.facility_name())?;
    writeln!(out, "{}", record.address())?;
    writeln!(out, "IVG eseguite nel 2023: {}", record.total_procedures_2023())?;
    writeln!(
        out,
        "% IVG farmacologiche: {}",
        record.pharmacological_percentage()
    )
}

pub fn content(out: &mut impl Write, content: &ViewContent<'_>) -> io::Result<()> {
    match content {
        ViewContent::Idle => Ok(()),
        ViewContent::NotFound => writeln!(out, "{}", NOT_FOUND),
        ViewContent::Facilities(records) => {
            for (idx, record) in records.iter().enumerate() {
                if idx > 0 {
                    writeln!(out)?;
                }
                facility_card(out, record)?;
            }
            Ok(())
        }
    }
}
