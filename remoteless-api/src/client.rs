use remoteless_parser::{
    decode_playlist_page, decode_search, decode_state, DecodeOptions, Playlist, PlaylistPage, Song, State,
};
use text_client::TextClient;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::{ClientConfig, Command, Result, Transport};

/// A blocking client for the Remoteless daemon
///
/// Every call issues its request(s) on the calling thread and returns owned
/// values; the client keeps no state between calls. Run calls on a worker
/// thread if the caller must stay responsive.
///
/// ```rust,no_run
/// use remoteless_api::RemotelessClient;
///
/// let client = RemotelessClient::new();
/// let state = client.state()?;
/// if !state.playing {
///     client.play_pause()?;
/// }
/// for playlist in client.playlists()? {
///     println!("{} ({} songs)", playlist.name, playlist.songs.len());
/// }
/// # Ok::<(), remoteless_api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RemotelessClient<T = TextClient> {
    transport: T,
    base_url: String,
    locale: String,
    options: DecodeOptions,
}

impl RemotelessClient<TextClient> {
    /// Create a client for the daemon at its default local address
    pub fn new() -> Self {
        let config = ClientConfig::default();
        let transport = TextClient::with_timeouts(config.connect_timeout, config.read_timeout);
        Self::from_parts(transport, &config)
    }

    /// Create a client from a configuration, after validating it
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = TextClient::with_timeouts(config.connect_timeout, config.read_timeout);
        Ok(Self::from_parts(transport, &config))
    }
}

impl Default for RemotelessClient<TextClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> RemotelessClient<T> {
    /// Create a client that sends its requests through a custom transport
    ///
    /// The configuration's timeouts are not applied; they belong to the transport.
    pub fn with_transport(transport: T, config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(transport, &config))
    }

    fn from_parts(transport: T, config: &ClientConfig) -> Self {
        Self {
            transport,
            base_url: config.normalized_base_url(),
            locale: config.locale.clone(),
            options: DecodeOptions {
                flush_trailing_record: config.flush_trailing_record,
            },
        }
    }

    /// All playlists with their songs, following pagination from offset 0
    pub fn playlists(&self) -> Result<Vec<Playlist>> {
        self.playlists_from(0)
    }

    /// All playlists with their songs, starting at `offset`
    ///
    /// Pages are fetched one after another. After each page the listing
    /// continues at the page's `to` offset while the page reports
    /// `remaining > 0`, and stops early if `to == from`.
    ///
    /// # Errors
    /// Fails as a whole if any page fails to fetch or decode.
    pub fn playlists_from(&self, offset: i32) -> Result<Vec<Playlist>> {
        let mut playlists = Vec::new();
        let mut offset = offset;
        let mut pages = 0usize;

        loop {
            let page = self.playlist_page(offset)?;
            pages += 1;
            playlists.extend(page.playlists);

            let cursor = page.cursor;
            if cursor.has_more() {
                offset = cursor.to;
                continue;
            }

            if cursor.remaining > 0 {
                warn!(
                    from = cursor.from,
                    to = cursor.to,
                    remaining = cursor.remaining,
                    "playlist pagination made no progress, stopping"
                );
            }
            break;
        }

        debug!(pages, playlists = playlists.len(), "playlist listing complete");
        Ok(playlists)
    }

    /// Fetch and decode a single `/playlists` page without following pagination
    pub fn playlist_page(&self, offset: i32) -> Result<PlaylistPage> {
        let offset = offset.to_string();
        let body = self.get("/playlists", &[("from", offset.as_str())])?;
        let page = decode_playlist_page(&body, self.options)?;

        debug!(
            offset = %offset,
            playlists = page.playlists.len(),
            from = page.cursor.from,
            to = page.cursor.to,
            remaining = page.cursor.remaining,
            "decoded playlist page"
        );
        Ok(page)
    }

    /// Current player state
    pub fn state(&self) -> Result<State> {
        let body = self.get("/state", &[])?;
        Ok(decode_state(&body)?)
    }

    /// Search the catalogue for `query`
    pub fn search(&self, query: &str) -> Result<Vec<Song>> {
        let body = self.get("/search", &[("cc", self.locale.as_str()), ("query", query)])?;
        let songs = decode_search(&body, self.options)?;
        debug!(query, results = songs.len(), "search complete");
        Ok(songs)
    }

    /// Send an action to the daemon and discard the response body
    ///
    /// Exactly one request is sent; a failure is returned as-is and never
    /// retried. Retrying after an ambiguous failure may perform the action twice.
    pub fn send(&self, command: &Command) -> Result<()> {
        let path = command.path();
        match command.query() {
            Some((key, value)) => self.get(&path, &[(key, value.as_str())])?,
            None => self.get(&path, &[])?,
        };
        debug!(command = command.name(), "command sent");
        Ok(())
    }

    /// Launch the player. See [`RemotelessClient::send`] on retries.
    pub fn start(&self) -> Result<()> {
        self.send(&Command::Start)
    }

    /// Previous track. See [`RemotelessClient::send`] on retries.
    pub fn prev(&self) -> Result<()> {
        self.send(&Command::Prev)
    }

    /// Toggle play/pause. See [`RemotelessClient::send`] on retries.
    pub fn play_pause(&self) -> Result<()> {
        self.send(&Command::PlayPause)
    }

    /// Next track. See [`RemotelessClient::send`] on retries.
    pub fn next(&self) -> Result<()> {
        self.send(&Command::Next)
    }

    pub fn volume_up(&self) -> Result<()> {
        self.send(&Command::VolumeUp)
    }

    pub fn volume_down(&self) -> Result<()> {
        self.send(&Command::VolumeDown)
    }

    /// Set the volume to `level` percent. The daemon decides how out-of-range values behave.
    pub fn set_volume(&self, level: i32) -> Result<()> {
        self.send(&Command::SetVolume(level))
    }

    /// Play a playlist, artist or track, given without the `spotify:` scheme
    pub fn play(&self, target: &str) -> Result<()> {
        self.send(&Command::Play(target.to_string()))
    }

    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<String> {
        let url = self.url(path, query);
        Ok(self.transport.fetch_text(&url)?)
    }

    fn url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query)
                .finish();
            url.push('?');
            url.push_str(&encoded);
        }
        url
    }
}
