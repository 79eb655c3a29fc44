//! Sinks: куда контроллер пишет результат frame
//!
//! Контроллер не знает про движок. Он пишет позу в TransformSink и
//! управляет клипами через AnimationSink. Glue-слой реализует оба trait'а
//! поверх своих объектов (Bevy Transform и ClipPlayer реализованы здесь).

use bevy::prelude::*;

use crate::components::ActorPose;

/// Приёмник анимационных команд
///
/// Контроллер шлёт play/stop каждый frame, в котором решает состояние,
/// и не трекает sink-side состояние. Повторный `play` уже играющего клипа
/// sink обязан дёшево игнорировать.
pub trait AnimationSink {
    fn play(&mut self, clip: &str, looped: bool);

    fn stop(&mut self, clip: &str);

    /// Полная библиотека клипов sink'а
    ///
    /// Нужна чтобы при выборе клипа остановить ВСЕ остальные, а не только
    /// второй locomotion клип. Пустой список = sink знает только то, что
    /// ему явно передали.
    fn clip_names(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Приёмник позы актора
pub trait TransformSink {
    fn write_pose(&mut self, pose: &ActorPose);
}

impl TransformSink for Transform {
    fn write_pose(&mut self, pose: &ActorPose) {
        self.translation = pose.position;
        self.rotation = pose.rotation;
    }
}

/// Запустить `clip` (looped) и остановить все остальные
///
/// "Остальные" = библиотека sink'а + `locomotion_clips` (idle/run),
/// чтобы инвариант держался даже для sink'а без `clip_names`.
pub fn play_exclusive<S>(sink: &mut S, clip: &str, locomotion_clips: [&str; 2])
where
    S: AnimationSink + ?Sized,
{
    let mut others = sink.clip_names();
    for name in locomotion_clips {
        if !others.iter().any(|other| other == name) {
            others.push(name.to_string());
        }
    }

    for other in others.iter().filter(|other| other.as_str() != clip) {
        sink.stop(other);
    }
    sink.play(clip, true);
}

/// Одна дорожка ClipPlayer'а
#[derive(Debug, Clone, PartialEq)]
pub struct ClipTrack {
    pub name: String,
    pub playing: bool,
    pub looped: bool,
    /// Сколько раз клип реально стартовал (redundant play не считается)
    pub starts: u32,
}

impl ClipTrack {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            playing: false,
            looped: false,
            starts: 0,
        }
    }
}

/// Animation sink компонент: библиотека клипов героя
///
/// Аналог набора animation groups импортированной модели. Неизвестный клип
/// добавляется в библиотеку при первом play.
#[derive(Component, Debug, Clone, Default)]
pub struct ClipPlayer {
    tracks: Vec<ClipTrack>,
    last_started: Option<String>,
}

impl ClipPlayer {
    pub fn with_clips<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tracks: names.into_iter().map(ClipTrack::new).collect(),
            last_started: None,
        }
    }

    pub fn track(&self, name: &str) -> Option<&ClipTrack> {
        self.tracks.iter().find(|track| track.name == name)
    }

    pub fn is_playing(&self, name: &str) -> bool {
        self.track(name).is_some_and(|track| track.playing)
    }

    /// Имена играющих клипов (в порядке библиотеки)
    pub fn playing(&self) -> impl Iterator<Item = &str> {
        self.tracks
            .iter()
            .filter(|track| track.playing)
            .map(|track| track.name.as_str())
    }

    /// Последний реально стартовавший клип
    pub fn last_started(&self) -> Option<&str> {
        self.last_started.as_deref()
    }

    pub fn start_count(&self, name: &str) -> u32 {
        self.track(name).map_or(0, |track| track.starts)
    }
}

impl AnimationSink for ClipPlayer {
    fn play(&mut self, clip: &str, looped: bool) {
        let index = match self.tracks.iter().position(|track| track.name == clip) {
            Some(index) => index,
            None => {
                self.tracks.push(ClipTrack::new(clip));
                self.tracks.len() - 1
            }
        };

        let track = &mut self.tracks[index];
        if track.playing && track.looped == looped {
            return;
        }

        track.playing = true;
        track.looped = looped;
        track.starts += 1;
        self.last_started = Some(track.name.clone());
    }

    fn stop(&mut self, clip: &str) {
        if let Some(track) = self.tracks.iter_mut().find(|track| track.name == clip) {
            track.playing = false;
        }
    }

    fn clip_names(&self) -> Vec<String> {
        self.tracks.iter().map(|track| track.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redundant_play_is_ignored() {
        let mut player = ClipPlayer::with_clips(["Idle", "Run"]);

        player.play("Run", true);
        player.play("Run", true);
        player.play("Run", true);

        assert!(player.is_playing("Run"));
        assert_eq!(player.start_count("Run"), 1);
        assert_eq!(player.last_started(), Some("Run"));
    }

    #[test]
    fn test_play_exclusive_stops_whole_library() {
        let mut player = ClipPlayer::with_clips(["Idle", "Run", "Wave", "Jump"]);
        player.play("Wave", false);
        player.play("Jump", true);

        play_exclusive(&mut player, "Idle", ["Idle", "Run"]);

        let playing: Vec<_> = player.playing().collect();
        assert_eq!(playing, vec!["Idle"]);
    }

    #[test]
    fn test_unknown_clip_added_on_play() {
        let mut player = ClipPlayer::default();
        play_exclusive(&mut player, "Run", ["Idle", "Run"]);

        assert!(player.is_playing("Run"));
        assert!(!player.is_playing("Idle"));
        assert_eq!(player.clip_names(), vec!["Run".to_string()]);
    }

    #[test]
    fn test_transform_sink_writes_pose() {
        let mut transform = Transform::default();
        let pose = ActorPose::new(Vec3::new(1.0, 2.0, 3.0), Quat::from_rotation_y(0.5));

        transform.write_pose(&pose);

        assert_eq!(transform.translation, pose.position);
        assert_eq!(transform.rotation, pose.rotation);
    }
}
