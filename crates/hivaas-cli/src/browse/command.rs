use anyhow::{bail, Context};
use hivaas_core::{Size, SortOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ImageStep {
    Next,
    Prev,
}

/// One line of input in a browse session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BrowseCommand {
    Help,
    Guide,
    Show,
    Next,
    Prev,
    Page(usize),
    Size(Size),
    Type(String),
    Search(String),
    Sort(SortOption),
    Clear,
    Types,
    Card(String),
    Pick { code: String, size: Size },
    Image { code: String, step: ImageStep },
    View(String),
    Close(String),
    Wish(String),
    Unwish(String),
    Wishlist,
    Share,
    Send(String),
    Quit,
}

pub(crate) const HELP: &str = "\
commands:
  guide                how to shop this catalog
  show                 current page
  next | prev          move one page
  page N               jump to page N
  size S               toggle size filter (XS S M L XL 2XL 3XL)
  type T               toggle type filter
  search [TEXT]        set keyword; empty clears it
  sort none|low-to-high|high-to-low
  clear                reset filters and sort
  types                list product types
  card CODE            show a product card
  pick CODE SIZE       toggle a size on a card
  img CODE next|prev   move the card's image carousel
  view CODE | close CODE
                       open or close the full-size image
  wish CODE            add to or remove from the wishlist
  unwish CODE          remove from the wishlist panel
  wishlist             show the wishlist
  share                share the whole wishlist
  send CODE            share one product with its picked sizes
  quit";

fn arg<'a>(rest: &'a str, usage: &str) -> anyhow::Result<&'a str> {
    let rest = rest.trim();
    if rest.is_empty() {
        bail!("usage: {usage}");
    }
    Ok(rest)
}

impl BrowseCommand {
    /// Parses one input line. Returns `Ok(None)` for a blank line.
    pub(crate) fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        let cmd = match verb.to_ascii_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "guide" => Self::Guide,
            "show" | "ls" => Self::Show,
            "next" | "n" => Self::Next,
            "prev" | "p" => Self::Prev,
            "page" => {
                let raw = arg(rest, "page N")?;
                Self::Page(raw.parse().with_context(|| format!("invalid page `{raw}`"))?)
            }
            "size" => Self::Size(arg(rest, "size S")?.parse()?),
            "type" => Self::Type(arg(rest, "type T")?.to_string()),
            "search" => Self::Search(rest.to_string()),
            "sort" => Self::Sort(arg(rest, "sort none|low-to-high|high-to-low")?.parse()?),
            "clear" => Self::Clear,
            "types" => Self::Types,
            "card" => Self::Card(arg(rest, "card CODE")?.to_string()),
            "pick" => {
                let (code, size) = arg(rest, "pick CODE SIZE")?
                    .rsplit_once(char::is_whitespace)
                    .context("usage: pick CODE SIZE")?;
                Self::Pick {
                    code: code.trim().to_string(),
                    size: size.parse()?,
                }
            }
            "img" => {
                let (code, step) = arg(rest, "img CODE next|prev")?
                    .rsplit_once(char::is_whitespace)
                    .context("usage: img CODE next|prev")?;
                let step = match step.to_ascii_lowercase().as_str() {
                    "next" => ImageStep::Next,
                    "prev" => ImageStep::Prev,
                    other => bail!("unknown image step `{other}`"),
                };
                Self::Image {
                    code: code.trim().to_string(),
                    step,
                }
            }
            "view" => Self::View(arg(rest, "view CODE")?.to_string()),
            "close" => Self::Close(arg(rest, "close CODE")?.to_string()),
            "wish" => Self::Wish(arg(rest, "wish CODE")?.to_string()),
            "unwish" => Self::Unwish(arg(rest, "unwish CODE")?.to_string()),
            "wishlist" => Self::Wishlist,
            "share" => Self::Share,
            "send" => Self::Send(arg(rest, "send CODE")?.to_string()),
            "quit" | "exit" | "q" => Self::Quit,
            other => bail!("unknown command `{other}`; try `help`"),
        };
        Ok(Some(cmd))
    }
}
