use crate::utils::*;
use clap::Args;
use lights_out_core as game;
use yew::prelude::*;

/// The one grid the page is showing, plus what is needed to deal a new one.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BoardSession {
    config: game::BoardConfig,
    seed: u64,
    grid: game::LightGrid,
}

impl BoardSession {
    pub(crate) fn new(config: game::BoardConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            grid: game::initialize(config, seed),
        }
    }

    pub(crate) fn grid(&self) -> &game::LightGrid {
        &self.grid
    }

    pub(crate) fn seed(&self) -> u64 {
        self.seed
    }

    pub(crate) fn has_won(&self) -> bool {
        self.grid.has_won()
    }

    /// Replaces the held grid with the result of pressing `coords`.
    ///
    /// Returns `None` once the board is solved, the won board accepts no more presses.
    pub(crate) fn press(&mut self, coords: game::Coord2) -> Option<game::ToggleOutcome> {
        if self.has_won() {
            log::debug!("ignoring press at {:?}, board already solved", coords);
            return None;
        }

        let (next, outcome) = self.grid.toggle_with_outcome(coords);
        self.grid = next;
        if outcome.is_won() {
            log::info!("solved with seed {}", self.seed);
        }
        Some(outcome)
    }

    pub(crate) fn restart(&mut self, seed: u64) {
        *self = Self::new(self.config, seed);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Press(game::Coord2),
    NewGame,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: game::Coord,
    col: game::Coord,
    is_lit: bool,
    callback: Callback<game::Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        is_lit,
        callback,
    } = props.clone();

    let class = classes!("cell", is_lit.then_some("lit"));
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) click", row, col);
        callback.emit((row, col));
    });

    html! {
        <td {class} {onclick}/>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct BoardProps {
    /// Number of rows on the board
    #[arg(long, default_value_t = 5)]
    pub rows: game::Coord,

    /// Number of columns on the board
    #[arg(long, default_value_t = 5)]
    pub cols: game::Coord,

    /// Chance that any light starts lit, between 0 and 1
    #[arg(long, default_value_t = 0.25)]
    pub chance: f64,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl BoardProps {
    fn config(&self) -> game::BoardConfig {
        game::BoardConfig::new((self.rows, self.cols), self.chance)
    }
}

#[derive(Debug)]
pub(crate) struct BoardView {
    session: BoardSession,
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);
        Self {
            session: BoardSession::new(props.config(), seed),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Press(coords) => {
                log::debug!("press cell: {:?}", coords);
                self.session.press(coords).is_some()
            }
            NewGame => {
                let seed = js_random_seed();
                log::debug!("new game, seed: {}", seed);
                self.session.restart(seed);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cb_new_game = ctx.link().callback(|_: MouseEvent| Msg::NewGame);

        // a solved board is replaced by the win message
        if self.session.has_won() {
            return html! {
                <div class="lights-out">
                    <p class="winner">{"You won!"}</p>
                    <button onclick={cb_new_game}>{"New game"}</button>
                </div>
            };
        }

        let grid = self.session.grid();
        let (rows, cols) = grid.size();

        html! {
            <div class="lights-out">
                <table class="board">
                    {
                        for (0..rows).map(|row| html! {
                            <tr>
                                {
                                    for (0..cols).map(|col| {
                                        let is_lit = grid[(row, col)];
                                        let callback = ctx.link().callback(Msg::Press);
                                        html! {
                                            <CellView {row} {col} {is_lit} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <button onclick={cb_new_game}>{"New game"}</button>
                <small class="seed">{format!("seed {}", self.session.seed())}</small>
            </div>
        }
    }
}
