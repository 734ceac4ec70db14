// Flag-driven sprite animator

use std::collections::HashMap;

use super::collaborators::{AnimFlag, AnimatorProxy};
use super::state::Facing;

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Name of the animation (e.g., "idle", "run", "attack")
    pub name: String,
    /// Number of frames in the animation
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Whether the animation loops
    pub looping: bool,
}

impl AnimationClip {
    pub fn new(name: &str, frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            frame_count,
            frame_duration: 1.0 / fps,
            looping,
        }
    }

    pub fn looping(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, true)
    }

    pub fn one_shot(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, false)
    }

    /// Get the total duration of one animation cycle
    pub fn total_duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_duration
    }
}

/// Boolean parameters of the animator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationFlags {
    pub running: bool,
    pub jumping: bool,
    pub attacking: bool,
}

impl AnimationFlags {
    pub fn get(&self, flag: AnimFlag) -> bool {
        match flag {
            AnimFlag::Running => self.running,
            AnimFlag::Jumping => self.jumping,
            AnimFlag::Attacking => self.attacking,
        }
    }

    pub fn set(&mut self, flag: AnimFlag, value: bool) {
        match flag {
            AnimFlag::Running => self.running = value,
            AnimFlag::Jumping => self.jumping = value,
            AnimFlag::Attacking => self.attacking = value,
        }
    }

    /// Clip that should be playing for these flags.
    /// Attack wins over jump, jump over run.
    pub fn clip_name(&self) -> &'static str {
        if self.attacking {
            "attack"
        } else if self.jumping {
            "jump"
        } else if self.running {
            "run"
        } else {
            "idle"
        }
    }
}

/// Animator that picks its clip from boolean flags and plays it frame by frame
#[derive(Debug)]
pub struct FlagAnimator {
    clips: HashMap<String, AnimationClip>,
    flags: AnimationFlags,
    current_clip: String,
    current_frame: usize,
    frame_timer: f32,
    playing: bool,
    flip_horizontal: bool,
}

impl Default for FlagAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl FlagAnimator {
    pub fn new() -> Self {
        Self {
            clips: HashMap::new(),
            flags: AnimationFlags::default(),
            current_clip: String::new(),
            current_frame: 0,
            frame_timer: 0.0,
            playing: true,
            flip_horizontal: false,
        }
    }

    /// Animator with the player's standard clips
    pub fn with_standard_clips() -> Self {
        let mut animator = Self::new();

        animator.add_clip(AnimationClip::looping("idle", 8, 10.0));
        animator.add_clip(AnimationClip::looping("run", 8, 12.0));
        animator.add_clip(AnimationClip::one_shot("jump", 4, 10.0));
        // 6 frames at 12 FPS: a 0.5s swing
        animator.add_clip(AnimationClip::one_shot("attack", 6, 12.0));

        animator.play("idle");
        animator
    }

    pub fn add_clip(&mut self, clip: AnimationClip) {
        self.clips.insert(clip.name.clone(), clip);
    }

    /// Switch clips; replaying the current clip does nothing
    fn play(&mut self, name: &str) {
        if self.current_clip != name {
            self.current_clip = name.to_string();
            self.current_frame = 0;
            self.frame_timer = 0.0;
            self.playing = true;
        }
    }

    /// Advance playback (called every frame)
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        let Some(clip) = self.clips.get(&self.current_clip) else {
            return;
        };

        self.frame_timer += dt;

        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frame_count {
                if clip.looping {
                    self.current_frame = 0;
                } else {
                    // Hold the last frame
                    self.current_frame = clip.frame_count.saturating_sub(1);
                    self.playing = false;
                    break;
                }
            }
        }
    }

    pub fn flags(&self) -> AnimationFlags {
        self.flags
    }

    pub fn flag(&self, flag: AnimFlag) -> bool {
        self.flags.get(flag)
    }

    pub fn current_clip(&self) -> &str {
        &self.current_clip
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_flipped_horizontal(&self) -> bool {
        self.flip_horizontal
    }
}

impl AnimatorProxy for FlagAnimator {
    fn set_flag(&mut self, flag: AnimFlag, value: bool) {
        self.flags.set(flag, value);
        let clip = self.flags.clip_name();
        self.play(clip);
    }

    fn clip_length(&self, state: &str) -> Option<f32> {
        self.clips.get(state).map(AnimationClip::total_duration)
    }

    fn set_facing(&mut self, facing: Facing) {
        self.flip_horizontal = facing.is_flipped();
    }
}
