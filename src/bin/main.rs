use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use log::{error, info};
use std::io::{stdin, stdout, Write};
use std::path::Path;
use trunic_core::export;
use trunic_core::{Config, Consonant, TranslatorEngine, Vowel};

const HELP: &str = "\
c <CONS>|-   set/clear consonant    v <VOWEL>|-  set/clear vowel
dot          toggle marker          space        add glyph
back         delete                 enter        new word
< / >        move cursor            t [text]     set translation
find <text>  insert known word      line         toggle word line
svg <path>   export page            exit         quit";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = Config::default_path();
    let config = Config::load_or_default(&config_path)?;
    info!("Using config {}", config_path.display());

    let mut engine = TranslatorEngine::from_config(&config)?;
    let mut status = String::new();

    loop {
        print_ui(&engine, &status)?;
        status.clear();

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim_end_matches(['\r', '\n']);
        let (cmd, arg) = line.split_once(' ').unwrap_or((line, ""));

        match cmd {
            "exit" => break,
            "c" => match parse_consonant(arg.trim()) {
                Some(c) => engine.set_consonant(c),
                None => status = format!("unknown consonant '{}'", arg.trim()),
            },
            "v" => match parse_vowel(arg.trim()) {
                Some(v) => engine.set_vowel(v),
                None => status = format!("unknown vowel '{}'", arg.trim()),
            },
            "dot" => engine.toggle_marker(),
            "space" => engine.insert_glyph(),
            "back" => engine.backspace(),
            "enter" => engine.new_word(),
            "<" => engine.move_left(),
            ">" => engine.move_right(),
            "line" => engine.word_line = !engine.word_line,
            "t" => {
                if let Err(e) = engine.set_translation(arg) {
                    error!("Could not save translation: {}", e);
                    status = format!("save failed: {}", e);
                }
            }
            "find" => {
                if !engine.import(arg) {
                    status = format!("no word translated as '{}'", arg);
                }
            }
            "svg" if !arg.is_empty() => {
                let mut editor = config.editor.clone();
                editor.word_line = engine.word_line;
                match export::save_page(Path::new(arg), engine.words_mut(), &editor) {
                    Ok(()) => status = format!("wrote {}", arg),
                    Err(e) => status = format!("export failed: {}", e),
                }
            }
            "" => {}
            _ => status = format!("unknown command '{}'", cmd),
        }
    }

    info!("Vocabulary holds {} words", engine.store().len());
    Ok(())
}

/// `-` clears the slot; anything else must be an exact name, case-insensitive.
fn parse_consonant(arg: &str) -> Option<Option<Consonant>> {
    if arg == "-" {
        return Some(None);
    }
    Consonant::from_name(&arg.to_ascii_uppercase()).map(Some)
}

fn parse_vowel(arg: &str) -> Option<Option<Vowel>> {
    if arg == "-" {
        return Some(None);
    }
    Vowel::from_name(&arg.to_ascii_uppercase()).map(Some)
}

fn print_ui(engine: &TranslatorEngine, status: &str) -> std::io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    writeln!(out, "{}", "Trunic Translate".bold())?;
    writeln!(out, "---------------------------------------------------------------")?;

    write!(out, "Consonants:")?;
    for c in Consonant::ALL {
        match c.example() {
            Some(ex) => write!(out, " {} {}", c.name(), ex.dark_grey())?,
            None => write!(out, " {}", c.name())?,
        }
    }
    writeln!(out)?;
    write!(out, "Vowels:    ")?;
    for v in Vowel::ALL {
        write!(out, " {} {}", v.name(), v.example().dark_grey())?;
    }
    writeln!(out, "\n")?;

    let cursor = engine.cursor();
    for (w_idx, word) in engine.words().iter().enumerate() {
        write!(out, "{:>3}: ", w_idx + 1)?;
        for (g_idx, glyph) in word.glyphs().iter().enumerate() {
            let mut token = glyph.sound_token();
            if token.is_empty() {
                token.push('_');
            }
            if glyph.marker() && (glyph.consonant().is_none() || glyph.vowel().is_none()) {
                token.push('.');
            }
            if w_idx == cursor.word && g_idx == cursor.glyph {
                write!(out, "[{}]", token.as_str().reverse())?;
            } else {
                write!(out, " {} ", token)?;
            }
        }
        if !word.translation.is_empty() {
            write!(out, "  = {}", word.translation.as_str().green())?;
        }
        writeln!(out)?;
    }

    writeln!(out, "\nText: {}", engine.transcript())?;
    writeln!(
        out,
        "Word line: {}   Known words: {}",
        if engine.word_line { "on" } else { "off" },
        engine.store().len()
    )?;
    writeln!(out, "\n{}", HELP.dark_grey())?;
    if !status.is_empty() {
        writeln!(out, "\n{}", status.yellow())?;
    }
    write!(out, "\n> ")?;
    out.flush()
}
