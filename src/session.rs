use anyhow::Result;

use crate::marker::find_image_request;
use crate::prompt::{InputType, Prompt};
use crate::providers::base::{CompletionProvider, ImageProvider};
use crate::providers::types::message::{Message, Role};

pub const COMPLETION_MODEL: &str = "gpt-4o-mini";
pub const IMAGE_MODEL: &str = "dall-e-3";
pub const IMAGE_SIZE: &str = "1024x1024";

/// Fixed instruction seeding every transcript. It teaches the model to
/// answer drawing requests with an `[IMAGE: keywords]` marker and
/// everything else with plain text.
pub const SYSTEM_PROMPT: &str = "You are a general-purpose assistant. When the user asks you to \
draw, paint or generate a picture, extract only the essential keywords of the request and respond \
with exactly [IMAGE: keywords]. Example: 'draw me a cat' -> '[IMAGE: a cute cat]'. Answer every \
other question with plain text.";

/// One interactive chat session: owns the transcript and drives each turn
/// through the completion and image backends.
pub struct Session<'a> {
    transcript: Vec<Message>,
    completions: Box<dyn CompletionProvider>,
    images: Box<dyn ImageProvider>,
    prompt: Box<dyn Prompt + 'a>,
}

impl<'a> Session<'a> {
    /// Create a session with its transcript seeded with the system
    /// instruction. Seeding happens here and nowhere else, so the
    /// first transcript entry is the system message for the whole
    /// session lifetime.
    pub fn new(
        completions: Box<dyn CompletionProvider>,
        images: Box<dyn ImageProvider>,
        prompt: Box<impl Prompt + 'a>,
    ) -> Self {
        Session {
            transcript: vec![Message::system(SYSTEM_PROMPT)],
            completions,
            images,
            prompt,
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Run the interactive loop until the user exits.
    pub fn start(&mut self) -> Result<()> {
        self.render_transcript();

        loop {
            let input = self.prompt.get_input()?;
            match input.input_type {
                InputType::Message => {
                    if let Some(content) = &input.content {
                        self.process_turn(content);
                    }
                }
                InputType::Exit => break,
                InputType::AskAgain => continue,
            }
        }

        self.prompt.close();
        Ok(())
    }

    /// Replay every non-system message, in order.
    pub fn render_transcript(&mut self) {
        for message in &self.transcript {
            if message.role != Role::System {
                self.prompt.render(message);
            }
        }
    }

    /// One user submission: the user message is appended and shown first,
    /// then at most two blocking calls run, and exactly one assistant
    /// message is appended however the turn resolves.
    pub fn process_turn(&mut self, utterance: &str) {
        self.transcript.push(Message::user(utterance));
        if let Some(message) = self.transcript.last() {
            self.prompt.render(message);
        }

        self.prompt.show_busy("awaiting reply");
        let reply = self
            .completions
            .complete(COMPLETION_MODEL, &self.transcript);
        self.prompt.hide_busy();

        let assistant = match reply {
            Ok(reply) => self.resolve_reply(&reply),
            // One attempt only; the failure becomes a visible message and
            // the session keeps accepting input.
            Err(e) => Message::assistant(format!("⚠️ Completion request failed: {e:#}")),
        };

        self.prompt.render(&assistant);
        self.transcript.push(assistant);
    }

    /// Turn a raw completion reply into the turn's assistant message,
    /// generating an image when the reply carries a usable marker.
    fn resolve_reply(&mut self, reply: &str) -> Message {
        match find_image_request(reply) {
            Some(phrase) if !phrase.is_empty() => {
                self.prompt
                    .show_busy(&format!("🎨 generating an image of '{}'", phrase));
                let generated = self.images.generate(IMAGE_MODEL, &phrase, IMAGE_SIZE);
                self.prompt.hide_busy();

                match generated {
                    Ok(url) => Message::assistant_image(url, phrase),
                    Err(e) => {
                        Message::assistant(format!("❌ Image generation failed: {e:#}"))
                    }
                }
            }
            // An empty phrase ([IMAGE:]) is not a usable prompt; keep the
            // raw reply instead of calling the image service.
            _ => Message::assistant(reply),
        }
    }
}
