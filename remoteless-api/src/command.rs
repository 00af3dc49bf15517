//! Fire-and-forget player actions

/// Scheme prepended to the target of [`Command::Play`]
pub const PLAY_URI_SCHEME: &str = "spotify";

/// An action the daemon performs on the player.
///
/// Each command is one GET request whose body is discarded. None of them are
/// safe to retry blindly: a request that failed after reaching the daemon may
/// already have skipped the track or toggled playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Launch the player application
    Start,
    /// Previous track
    Prev,
    /// Toggle between playing and paused
    PlayPause,
    /// Next track
    Next,
    /// Raise the volume one step
    VolumeUp,
    /// Lower the volume one step
    VolumeDown,
    /// Set the volume to a percentage
    SetVolume(i32),
    /// Play a playlist, artist or track, given without its scheme
    /// (`track:4uLU6hMCjMI75M1A2tKUQC` becomes `spotify:track:4uLU6hMCjMI75M1A2tKUQC`)
    Play(String),
}

impl Command {
    /// Get the name of this command as a string
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Prev => "prev",
            Command::PlayPause => "playpause",
            Command::Next => "next",
            Command::VolumeUp => "volup",
            Command::VolumeDown => "voldown",
            Command::SetVolume(_) => "volset",
            Command::Play(_) => "play",
        }
    }

    /// Request path relative to the daemon's base URL
    pub fn path(&self) -> String {
        format!("/action/{}", self.name())
    }

    /// Query parameter carried by the command, if any
    pub fn query(&self) -> Option<(&'static str, String)> {
        match self {
            Command::SetVolume(level) => Some(("vol", level.to_string())),
            Command::Play(target) => Some(("uri", format!("{}:{}", PLAY_URI_SCHEME, target))),
            _ => None,
        }
    }
}
