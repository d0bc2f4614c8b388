//! AVAudioSession backend adapter (iOS)

use objc2_avf_audio::{
    AVAudioSession, AVAudioSessionCategoryAmbient, AVAudioSessionCategoryMultiRoute,
    AVAudioSessionCategoryOptions, AVAudioSessionCategoryPlayAndRecord,
    AVAudioSessionCategoryPlayback, AVAudioSessionCategoryRecord,
    AVAudioSessionCategorySoloAmbient,
};

use crate::session::backend::{SessionBackend, SessionError};
use crate::session::category::{Category, CategoryOptions};

/// The process-wide AVAudioSession as a [`SessionBackend`]
#[derive(Debug, Default)]
pub struct AvfAudioSession;

impl AvfAudioSession {
    /// Handle to the shared platform session
    pub fn new() -> Self {
        Self
    }
}

fn native_options(options: CategoryOptions) -> AVAudioSessionCategoryOptions {
    type Native = AVAudioSessionCategoryOptions;

    let mut native = Native::empty();
    if options.contains(CategoryOptions::MIX_WITH_OTHERS) {
        native |= Native::MixWithOthers;
    }
    if options.contains(CategoryOptions::DUCK_OTHERS) {
        native |= Native::DuckOthers;
    }
    if options.contains(CategoryOptions::ALLOW_BLUETOOTH) {
        native |= Native::AllowBluetoothHFP;
    }
    if options.contains(CategoryOptions::DEFAULT_TO_SPEAKER) {
        native |= Native::DefaultToSpeaker;
    }
    if options.contains(CategoryOptions::INTERRUPT_SPOKEN_AUDIO_AND_MIX_WITH_OTHERS) {
        native |= Native::InterruptSpokenAudioAndMixWithOthers;
    }
    if options.contains(CategoryOptions::ALLOW_BLUETOOTH_A2DP) {
        native |= Native::AllowBluetoothA2DP;
    }
    if options.contains(CategoryOptions::ALLOW_AIR_PLAY) {
        native |= Native::AllowAirPlay;
    }
    native
}

impl SessionBackend for AvfAudioSession {
    fn set_category(
        &mut self,
        category: Category,
        options: CategoryOptions,
    ) -> Result<(), SessionError> {
        // SAFETY: Calling into system frameworks requires `unsafe`
        unsafe {
            let session = AVAudioSession::sharedInstance();
            let native_category = match category {
                Category::Ambient => AVAudioSessionCategoryAmbient,
                Category::SoloAmbient => AVAudioSessionCategorySoloAmbient,
                Category::Playback => AVAudioSessionCategoryPlayback,
                Category::Record => AVAudioSessionCategoryRecord,
                Category::PlayAndRecord => AVAudioSessionCategoryPlayAndRecord,
                Category::MultiRoute => AVAudioSessionCategoryMultiRoute,
            }
            .unwrap();

            session
                .setCategory_withOptions_error(native_category, native_options(options))
                .map_err(|error| SessionError {
                    code: error.code() as i32,
                    message: error.localizedDescription().to_string(),
                })
        }
    }
}
