// Interactive replay in the terminal.
//
// Keys: ←/p previous, →/n/space next, Home/s start, End/e end, digits + Enter jump to a move,
// q/Esc quit.

use std::cell::RefCell;
use std::fmt;
use std::io;
use std::ops::ControlFlow;
use std::rc::Rc;

use anyhow::Context;
use crossterm::event::{self as term_event, KeyCode, KeyEventKind};
use crossterm::style::{self, Stylize};
use crossterm::{cursor, execute, terminal};
use scopeguard::defer;

use chess_replay::{DecodeAdapter, NavigationCommand, ReplayConfig, ReplayController, start_replay};

use crate::http_decoder::HttpDecodingService;
use crate::tui::{TerminalDisplay, TerminalMessages};


pub struct ViewerConfig {
    pub decoder_url: String,
    pub game: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum KeyAction {
    Navigate(NavigationCommand),
    JumpDigit(char),
    Jump,
    Quit,
    Ignore,
}

fn key_action(code: KeyCode) -> KeyAction {
    match code {
        KeyCode::Left | KeyCode::Char('p') => KeyAction::Navigate(NavigationCommand::Previous),
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Char(' ') => {
            KeyAction::Navigate(NavigationCommand::Next)
        }
        KeyCode::Home | KeyCode::Char('s') => KeyAction::Navigate(NavigationCommand::ToStart),
        KeyCode::End | KeyCode::Char('e') => KeyAction::Navigate(NavigationCommand::ToEnd),
        KeyCode::Char(ch) if ch.is_ascii_digit() => KeyAction::JumpDigit(ch),
        KeyCode::Enter => KeyAction::Jump,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::Ignore,
    }
}

fn handle_key(
    controller: &mut ReplayController, jump_input: &mut String, action: KeyAction,
) -> ControlFlow<()> {
    match action {
        KeyAction::Navigate(command) => {
            jump_input.clear();
            controller.apply(command);
        }
        KeyAction::JumpDigit(ch) => jump_input.push(ch),
        KeyAction::Jump => {
            if let Ok(index) = jump_input.parse::<usize>() {
                controller.go_to(index);
            }
            jump_input.clear();
        }
        KeyAction::Quit => return ControlFlow::Break(()),
        KeyAction::Ignore => {}
    }
    ControlFlow::Continue(())
}

fn writeln_raw(stdout: &mut io::Stdout, v: impl fmt::Display) -> io::Result<()> {
    let s = v.to_string();
    // Note. Not using `lines()` because it removes trailing new line.
    for line in s.split('\n') {
        execute!(stdout, style::Print(line), cursor::MoveToNextLine(1), cursor::Hide)?;
    }
    Ok(())
}

fn render(
    stdout: &mut io::Stdout, controller: &ReplayController, display: &TerminalDisplay,
    messages: &TerminalMessages, jump_input: &str,
) -> io::Result<()> {
    execute!(stdout, cursor::MoveTo(0, 0), terminal::Clear(terminal::ClearType::All))?;
    writeln_raw(stdout, display.render())?;
    let last_move = controller
        .record()
        .move_leading_to(controller.index())
        .map_or_else(|| "-".to_owned(), |m| m.to_string());
    writeln_raw(stdout, format!("last move: {}\n", last_move.bold()))?;
    writeln_raw(
        stdout,
        "←/p previous  →/n next  s start  e end  <number>⏎ jump  q quit"
            .with(style::Color::DarkGrey),
    )?;
    if !jump_input.is_empty() {
        writeln_raw(stdout, format!("jump to move {jump_input}▂"))?;
    }
    writeln_raw(stdout, "")?;
    writeln_raw(stdout, messages.render().with(style::Color::DarkGrey))?;
    Ok(())
}

pub fn run(config: ViewerConfig) -> anyhow::Result<()> {
    let service = HttpDecodingService::new(&config.decoder_url)?;
    let adapter = DecodeAdapter::new(Rc::new(service));
    let replay_config = ReplayConfig::with_game(config.game);
    let display = Rc::new(RefCell::new(TerminalDisplay::new()));
    let mut messages = TerminalMessages::default();
    let mut controller = async_std::task::block_on(start_replay(
        &adapter,
        &replay_config,
        display.clone(),
        &mut messages,
    ))
    .context("Cannot replay the game")?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
    defer! {
        let _ = execute!(io::stdout(), terminal::LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    };

    let mut jump_input = String::new();
    render(&mut stdout, &controller, &display.borrow(), &messages, &jump_input)?;
    loop {
        let term_event::Event::Key(event) = term_event::read()? else {
            continue;
        };
        if event.kind != KeyEventKind::Press {
            continue;
        }
        if handle_key(&mut controller, &mut jump_input, key_action(event.code)).is_break() {
            return Ok(());
        }
        render(&mut stdout, &controller, &display.borrow(), &messages, &jump_input)?;
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use chess_replay::test_util::sample_game_record;

    use super::*;

    #[test]
    fn key_mapping() {
        use KeyAction::*;
        use NavigationCommand::*;
        let cases = [
            (KeyCode::Left, Navigate(Previous)),
            (KeyCode::Char('p'), Navigate(Previous)),
            (KeyCode::Right, Navigate(Next)),
            (KeyCode::Char('n'), Navigate(Next)),
            (KeyCode::Char(' '), Navigate(Next)),
            (KeyCode::Home, Navigate(ToStart)),
            (KeyCode::Char('s'), Navigate(ToStart)),
            (KeyCode::End, Navigate(ToEnd)),
            (KeyCode::Char('e'), Navigate(ToEnd)),
            (KeyCode::Char('7'), JumpDigit('7')),
            (KeyCode::Enter, Jump),
            (KeyCode::Char('q'), Quit),
            (KeyCode::Esc, Quit),
            (KeyCode::Char('x'), Ignore),
            (KeyCode::Tab, Ignore),
        ];
        for (code, expected) in cases {
            assert_eq!(key_action(code), expected, "{code:?}");
        }
    }

    fn press(
        controller: &mut ReplayController, jump_input: &mut String, codes: &[KeyCode],
    ) -> ControlFlow<()> {
        for &code in codes {
            handle_key(controller, jump_input, key_action(code))?;
        }
        ControlFlow::Continue(())
    }

    #[test]
    fn digits_and_enter_jump_to_move() {
        let mut controller = ReplayController::new(sample_game_record(12)).unwrap();
        let mut jump_input = String::new();
        let digits = [KeyCode::Char('1'), KeyCode::Char('0')];
        assert!(press(&mut controller, &mut jump_input, &digits).is_continue());
        assert_eq!(jump_input, "10");
        assert_eq!(controller.index(), 0);
        assert!(press(&mut controller, &mut jump_input, &[KeyCode::Enter]).is_continue());
        assert_eq!(controller.index(), 10);
        assert_eq!(jump_input, "");
    }

    #[test]
    fn jump_past_the_end_is_clamped() {
        let mut controller = ReplayController::new(sample_game_record(3)).unwrap();
        let mut jump_input = String::new();
        let keys = [KeyCode::Char('9'), KeyCode::Char('9'), KeyCode::Enter];
        assert!(press(&mut controller, &mut jump_input, &keys).is_continue());
        assert_eq!(controller.index(), 3);
    }

    #[test]
    fn navigation_discards_pending_jump() {
        let mut controller = ReplayController::new(sample_game_record(5)).unwrap();
        let mut jump_input = String::new();
        let keys = [KeyCode::Char('4'), KeyCode::Right, KeyCode::Enter];
        assert!(press(&mut controller, &mut jump_input, &keys).is_continue());
        assert_eq!(controller.index(), 1);
        assert_eq!(jump_input, "");
    }

    #[test]
    fn quit_stops_processing() {
        let mut controller = ReplayController::new(sample_game_record(5)).unwrap();
        let mut jump_input = String::new();
        let keys = [KeyCode::Right, KeyCode::Char('q'), KeyCode::Right];
        assert_eq!(press(&mut controller, &mut jump_input, &keys), ControlFlow::Break(()));
        assert_eq!(controller.index(), 1);
    }
}
