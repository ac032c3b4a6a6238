//! Processing-instruction states.
//!
//! Not part of the WHATWG tokenizer proper: XML-style `<?...?>` markup is a
//! non-standard extension this tokenizer supports when
//! `TokenizerConfig::allow_processing_instructions` is set (see the
//! external-interfaces contract). When it's unset, `<?` falls back to the
//! standard bogus-comment treatment instead.

use super::states::TokenizerState::*;
use super::Html5Tokenizer;
use crate::chars;
use crate::html5::shared::ParseErrorKind::*;

impl Html5Tokenizer {
    pub(crate) fn step_processing_instruction(&mut self) -> bool {
        self.transition_to(ProcessingInstructionTarget);
        true
    }

    pub(crate) fn step_processing_instruction_target(&mut self) -> bool {
        loop {
            match self.input.char() {
                Some(c) if chars::is_whitespace(c) => {
                    if self.pi_mut().target.is_empty() {
                        self.error(ExpectedProcessingInstructionTarget);
                    }
                    self.transition_to(AfterProcessingInstructionTarget);
                    return true;
                }
                Some('?') => {
                    self.input.unget('?');
                    self.transition_to(ProcessingInstructionEnd);
                    return true;
                }
                Some('>') => {
                    if self.pi_mut().target.is_empty() {
                        self.error(ExpectedProcessingInstructionTarget);
                    }
                    self.pi_mut().correct = false;
                    self.emit_pi();
                    self.transition_to(Data);
                    return true;
                }
                Some(c) => self.pi_mut().target.push(c),
                None => {
                    self.error(EofInProcessingInstruction);
                    self.pi_mut().correct = false;
                    self.emit_pi();
                    return false;
                }
            }
        }
    }

    pub(crate) fn step_after_processing_instruction_target(&mut self) -> bool {
        match self.input.char() {
            Some(c) if chars::is_whitespace(c) => true,
            Some('?') => {
                self.input.unget('?');
                self.transition_to(ProcessingInstructionEnd);
                true
            }
            Some('>') => {
                self.pi_mut().correct = false;
                self.emit_pi();
                self.transition_to(Data);
                true
            }
            Some(c) => {
                self.input.unget(c);
                self.transition_to(ProcessingInstructionData);
                true
            }
            None => {
                self.error(EofInProcessingInstruction);
                self.pi_mut().correct = false;
                self.emit_pi();
                false
            }
        }
    }

    pub(crate) fn step_processing_instruction_data(&mut self) -> bool {
        loop {
            match self.input.char() {
                Some('?') => {
                    self.input.unget('?');
                    self.transition_to(ProcessingInstructionEnd);
                    return true;
                }
                Some('>') => {
                    self.pi_mut().correct = false;
                    self.emit_pi();
                    self.transition_to(Data);
                    return true;
                }
                Some(c) => self.pi_mut().data.push(c),
                None => {
                    self.error(EofInProcessingInstruction);
                    self.pi_mut().correct = false;
                    self.emit_pi();
                    return false;
                }
            }
        }
    }

    pub(crate) fn step_processing_instruction_end(&mut self) -> bool {
        if self.consume_ascii_sequence_ci("?>") {
            self.emit_pi();
            self.transition_to(Data);
            return true;
        }
        match self.input.char() {
            Some(c) => {
                self.pi_mut().data.push(c);
                self.transition_to(ProcessingInstructionData);
                true
            }
            None => {
                self.error(EofInProcessingInstruction);
                self.pi_mut().correct = false;
                self.emit_pi();
                false
            }
        }
    }
}
