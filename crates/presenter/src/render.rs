use std::io::{self, Write};

use common::BiasError;

use crate::{
    catalog_view::CatalogView,
    directive::{DisplayDirective, IndicatorCell, RowVisibility, Tone},
};

/// Applies presenter output to a concrete view.
pub trait Renderer {
    fn show_catalog(&mut self, view: &CatalogView) -> io::Result<()>;

    fn show_loading(&mut self, symbol: &str) -> io::Result<()>;

    fn apply(&mut self, directive: &DisplayDirective) -> io::Result<()>;

    fn show_error(&mut self, error: &BiasError) -> io::Result<()>;
}

/// Plain-text renderer for terminals, optionally with ANSI colors.
pub struct TextRenderer<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, tone: Tone, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        let code = match tone {
            Tone::Success => "32",
            Tone::Danger => "31",
            Tone::Info => "36",
            Tone::Warning => "33",
            Tone::Neutral => return text.to_string(),
        };
        format!("\x1b[{code}m{text}\x1b[0m")
    }

    fn cell(&self, cell: &IndicatorCell) -> String {
        self.paint(cell.tone, &cell.text)
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn show_catalog(&mut self, view: &CatalogView) -> io::Result<()> {
        match view {
            CatalogView::Ready {
                options,
                quick_select,
            } => {
                writeln!(self.out, "Supported pairs:")?;
                for option in options {
                    writeln!(self.out, "  {}", option.label)?;
                }
                writeln!(self.out, "Quick select: {}", quick_select.join(" "))?;
            }
            CatalogView::Unavailable { notice } => {
                let line = self.paint(Tone::Warning, notice);
                writeln!(self.out, "{line}")?;
            }
        }
        self.out.flush()
    }

    fn show_loading(&mut self, symbol: &str) -> io::Result<()> {
        writeln!(self.out, "Analysing {}...", symbol.trim())?;
        self.out.flush()
    }

    fn apply(&mut self, d: &DisplayDirective) -> io::Result<()> {
        let header = format!("{} {} {}", d.symbol, d.icon, d.bias);
        let header = self.paint(d.header_class, header.trim());
        let strength = self.paint(d.strength_class, &d.strength_text);
        let daily = self.paint(d.daily_class, &d.daily_text);
        let change = self.paint(
            d.change_class,
            &format!("{} {}", d.change_icon.glyph(), d.change_text),
        );

        writeln!(self.out, "{header}")?;
        writeln!(self.out, "  {strength}")?;
        writeln!(self.out, "  {}", d.recommendation_text())?;
        writeln!(self.out, "  {daily}")?;
        if d.weekly_row == RowVisibility::Shown {
            if let (Some(text), Some(tone)) = (&d.weekly_text, d.weekly_class) {
                let weekly = self.paint(tone, text);
                writeln!(self.out, "  {weekly}")?;
            }
        }

        let i = &d.indicators;
        let trend = format!(
            "  RSI {}  MACD {}  EMA20 {}  EMA50 {}",
            self.cell(&i.rsi),
            self.cell(&i.macd),
            self.cell(&i.ema20),
            self.cell(&i.ema50)
        );
        let stoch = format!(
            "  Stoch %K {}  %D {}",
            self.cell(&i.stoch_k),
            self.cell(&i.stoch_d)
        );
        writeln!(self.out, "{trend}")?;
        writeln!(self.out, "{stoch}")?;
        writeln!(
            self.out,
            "  Previous {}  Current {}  Change {change}",
            d.prev_price, d.current_price
        )?;
        self.out.flush()
    }

    fn show_error(&mut self, error: &BiasError) -> io::Result<()> {
        let line = self.paint(Tone::Danger, &error.to_string());
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }
}
