use super::tree::{PartKind, RollPart, RollResult};
use crate::common::{Int, UInt};

pub trait Stringify {
    fn str_result(&mut self, result: &RollResult) -> String {
        let mut ret = String::new();
        for (i, part) in result.parts().iter().enumerate() {
            if i > 0 {
                ret.push(' ');
                ret.push(part.operator.as_char());
                ret.push(' ');
            }
            ret.push_str(&self.str_part(part));
        }
        let total = self.str_total(result.total());
        format!("{} = {}", ret, total)
    }

    fn str_part(&mut self, part: &RollPart) -> String {
        match part.kind {
            PartKind::DiceRoll => self.str_dice(part),
            PartKind::Constant => self.str_constant(part),
        }
    }

    fn str_dice(&mut self, part: &RollPart) -> String {
        let faces = part
            .faces()
            .map(|face| self.str_face(face, part.die_size))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}d{} ({})", part.sides, part.die_size, faces)
    }

    fn str_face(&mut self, face: Int, _die_size: UInt) -> String {
        face.to_string()
    }

    fn str_constant(&mut self, part: &RollPart) -> String {
        part.absolute_value.to_string()
    }

    fn str_total(&mut self, total: Int) -> String {
        total.to_string()
    }
}

#[derive(Default)]
pub struct SimpleStringifier;

impl SimpleStringifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stringify for SimpleStringifier {}

/// Bolds critical faces (1 or the die size) and puts the total in code.
#[derive(Default)]
pub struct MarkdownStringifier;

impl MarkdownStringifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stringify for MarkdownStringifier {
    fn str_face(&mut self, face: Int, die_size: UInt) -> String {
        if face == 1 || UInt::try_from(face) == Ok(die_size) {
            format!("**{}**", face)
        } else {
            face.to_string()
        }
    }

    fn str_total(&mut self, total: Int) -> String {
        format!("`{}`", total)
    }
}
