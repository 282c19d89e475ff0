//! IHM dashboard binary. Trunk builds this for `wasm32` and loads it from
//! `index.html`; the app mounts itself to `<body>`.

fn main() {
    client::start();
    log::debug!("ihm dashboard mounted");
}
