use yew::prelude::*;

/// The static element-id surface the controllers mutate. Rendered exactly
/// once; visibility and contents are driven imperatively afterwards, so
/// nothing in here may depend on yew state.
#[function_component(GameSurface)]
pub fn game_surface() -> Html {
    html! {
        <>
            <div id="title-scene" style="display:none;">
                <h1>{"Robot Race"}</h1>
                <p>{"Press Space or tap to start"}</p>
            </div>
            <div id="game-player-info">
                <div id="game-lifes">
                    <span>{"Lives"}</span>
                    <div id="lifes"></div>
                </div>
                <div id="game-dice-chosen"></div>
                <div id="game-dice-results"></div>
            </div>
            <div id="game-board-container"></div>
        </>
    }
}
