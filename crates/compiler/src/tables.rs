//! Assemble the TrueType tables for an icon font.

use font_types::{FWord, Fixed, LongDateTime, Tag, UfWord};
use read_fonts::types::{GlyphId, NameId};
use write_fonts::{
    FontBuilder,
    tables::{
        cmap::Cmap,
        glyf::{Bbox, GlyfLocaBuilder, Glyph},
        head::{Flags, Head, MacStyle},
        hhea::Hhea,
        hmtx::{Hmtx, LongMetric},
        loca::LocaFormat,
        maxp::Maxp,
        name::{Name, NameRecord},
        os2::{Os2, SelectionFlags},
        post::Post,
    },
};

use crate::{
    CompileOptions,
    error::{Error, Result},
};

/// Private Use Area bit in OS/2 ulUnicodeRange2 (bit 60 overall).
const UNICODE_RANGE_PUA: u32 = 1 << (60 - 32);

/// One compiled glyph with the metrics the font-wide tables need.
#[derive(Debug, Clone)]
pub struct GlyphEntry {
    pub name: String,
    pub glyph: Glyph,
    pub advance: u16,
    pub points: usize,
    pub contours: usize,
}

impl GlyphEntry {
    pub fn notdef(advance: u16) -> Self {
        Self { name: ".notdef".to_string(), glyph: Glyph::Empty, advance, points: 0, contours: 0 }
    }

    fn bbox(&self) -> Option<Bbox> {
        match &self.glyph {
            Glyph::Simple(simple) => Some(simple.bbox),
            _ => None,
        }
    }
}

/// Build the font binary. `glyphs[0]` must be `.notdef`; `glyphs[n + 1]` is
/// mapped to `options.start_codepoint + n`.
pub fn build_font(glyphs: &[GlyphEntry], options: &CompileOptions) -> Result<Vec<u8>> {
    let num_glyphs = u16::try_from(glyphs.len()).map_err(|_| Error::TooManyGlyphs(glyphs.len()))?;

    let mut glyf_builder = GlyfLocaBuilder::new();
    for entry in glyphs {
        glyf_builder.add_glyph(&entry.glyph)?;
    }
    let (glyf, loca, loca_format) = glyf_builder.build();

    let bounds = font_bbox(glyphs);
    let cmap = build_cmap(glyphs.len().saturating_sub(1), options.start_codepoint)?;
    let hmtx = build_hmtx(glyphs);

    let mut builder = FontBuilder::new();
    builder.add_table(&build_head(options.font_height, bounds, loca_format))?;
    builder.add_table(&build_hhea(glyphs, options.font_height, num_glyphs))?;
    builder.add_table(&hmtx)?;
    builder.add_table(&build_maxp(glyphs, num_glyphs))?;
    builder.add_table(&build_os2(glyphs, options))?;
    builder.add_table(&cmap)?;
    builder.add_table(&build_post(glyphs))?;
    builder.add_table(&build_name(&options.font_name))?;
    builder.add_table(&glyf)?;
    builder.add_table(&loca)?;

    Ok(builder.build())
}

fn font_bbox(glyphs: &[GlyphEntry]) -> Bbox {
    glyphs
        .iter()
        .filter_map(GlyphEntry::bbox)
        .reduce(|a, b| Bbox {
            x_min: a.x_min.min(b.x_min),
            y_min: a.y_min.min(b.y_min),
            x_max: a.x_max.max(b.x_max),
            y_max: a.y_max.max(b.y_max),
        })
        .unwrap_or(Bbox { x_min: 0, y_min: 0, x_max: 0, y_max: 0 })
}

fn build_cmap(icon_count: usize, start: u32) -> Result<Cmap> {
    let mappings = (0..icon_count)
        .map(|index| {
            // Any start that overflows is already past the Unicode range.
            let codepoint = start.checked_add(index as u32).ok_or(Error::InvalidCodepoint(start))?;
            let ch = char::from_u32(codepoint).ok_or(Error::InvalidCodepoint(codepoint))?;
            Ok((ch, GlyphId::new(index as u32 + 1)))
        })
        .collect::<Result<Vec<_>>>()?;

    Cmap::from_mappings(mappings).map_err(|_| Error::Cmap)
}

fn build_head(units_per_em: u16, bounds: Bbox, loca_format: LocaFormat) -> Head {
    Head {
        font_revision: Fixed::from_f64(1.0),
        checksum_adjustment: 0,
        magic_number: 0x5F0F3CF5,
        flags: Flags::empty(),
        units_per_em,
        // Fixed timestamps keep the output reproducible.
        created: LongDateTime::new(0),
        modified: LongDateTime::new(0),
        x_min: bounds.x_min,
        y_min: bounds.y_min,
        x_max: bounds.x_max,
        y_max: bounds.y_max,
        mac_style: MacStyle::empty(),
        lowest_rec_ppem: 8,
        font_direction_hint: 2,
        index_to_loc_format: match loca_format {
            LocaFormat::Short => 0,
            LocaFormat::Long => 1,
        },
    }
}

fn build_hhea(glyphs: &[GlyphEntry], units_per_em: u16, num_glyphs: u16) -> Hhea {
    let advance_width_max = glyphs.iter().map(|g| g.advance).max().unwrap_or(0);

    let mut min_lsb = i16::MAX;
    let mut min_rsb = i16::MAX;
    let mut max_extent = i16::MIN;
    for entry in glyphs {
        if let Some(bbox) = entry.bbox() {
            min_lsb = min_lsb.min(bbox.x_min);
            min_rsb = min_rsb.min(clamp_i16(i32::from(entry.advance) - i32::from(bbox.x_max)));
            max_extent = max_extent.max(bbox.x_max);
        }
    }
    if max_extent == i16::MIN {
        (min_lsb, min_rsb, max_extent) = (0, 0, 0);
    }

    Hhea {
        ascender: FWord::new(clamp_i16(i32::from(units_per_em))),
        descender: FWord::new(0),
        line_gap: FWord::new(0),
        advance_width_max: UfWord::new(advance_width_max),
        min_left_side_bearing: FWord::new(min_lsb),
        min_right_side_bearing: FWord::new(min_rsb),
        x_max_extent: FWord::new(max_extent),
        caret_slope_rise: 1,
        caret_slope_run: 0,
        caret_offset: 0,
        number_of_h_metrics: num_glyphs,
    }
}

fn build_hmtx(glyphs: &[GlyphEntry]) -> Hmtx {
    Hmtx {
        h_metrics: glyphs
            .iter()
            .map(|entry| LongMetric {
                advance: entry.advance,
                side_bearing: entry.bbox().map_or(0, |bbox| bbox.x_min),
            })
            .collect(),
        left_side_bearings: vec![],
    }
}

fn build_maxp(glyphs: &[GlyphEntry], num_glyphs: u16) -> Maxp {
    let max_points = glyphs.iter().map(|g| g.points).max().unwrap_or(0);
    let max_contours = glyphs.iter().map(|g| g.contours).max().unwrap_or(0);

    Maxp {
        num_glyphs,
        max_points: Some(clamp_u16(max_points)),
        max_contours: Some(clamp_u16(max_contours)),
        max_composite_points: Some(0),
        max_composite_contours: Some(0),
        max_zones: Some(1),
        max_twilight_points: Some(0),
        max_storage: Some(0),
        max_function_defs: Some(0),
        max_instruction_defs: Some(0),
        max_stack_elements: Some(0),
        max_size_of_instructions: Some(0),
        max_component_elements: Some(0),
        max_component_depth: Some(0),
    }
}

fn build_os2(glyphs: &[GlyphEntry], options: &CompileOptions) -> Os2 {
    let upm = clamp_i16(i32::from(options.font_height));
    let icon_count = glyphs.len().saturating_sub(1) as u32;
    let first = options.start_codepoint;
    let last = first + icon_count.saturating_sub(1);
    let avg_width = if glyphs.is_empty() {
        0
    } else {
        glyphs.iter().map(|g| u64::from(g.advance)).sum::<u64>() / glyphs.len() as u64
    };

    Os2 {
        x_avg_char_width: clamp_i16(avg_width as i32),
        us_weight_class: 400,
        us_width_class: 5,
        fs_type: 0,
        y_subscript_x_size: upm / 2,
        y_subscript_y_size: upm / 2,
        y_subscript_x_offset: 0,
        y_subscript_y_offset: upm / 10,
        y_superscript_x_size: upm / 2,
        y_superscript_y_size: upm / 2,
        y_superscript_x_offset: 0,
        y_superscript_y_offset: upm / 3,
        y_strikeout_size: upm / 20,
        y_strikeout_position: upm / 4,
        s_family_class: 0,
        panose_10: [0; 10],
        ul_unicode_range_1: 0,
        ul_unicode_range_2: UNICODE_RANGE_PUA,
        ul_unicode_range_3: 0,
        ul_unicode_range_4: 0,
        ach_vend_id: Tag::new(b"NONE"),
        fs_selection: SelectionFlags::REGULAR,
        us_first_char_index: clamp_u16(first as usize),
        us_last_char_index: clamp_u16(last as usize),
        s_typo_ascender: upm,
        s_typo_descender: 0,
        s_typo_line_gap: 0,
        us_win_ascent: options.font_height,
        us_win_descent: 0,
        ul_code_page_range_1: Some(0),
        ul_code_page_range_2: Some(0),
        sx_height: Some(upm / 2),
        s_cap_height: Some(upm),
        us_default_char: Some(0),
        us_break_char: Some(0x20),
        us_max_context: Some(0),
        us_lower_optical_point_size: None,
        us_upper_optical_point_size: None,
    }
}

fn build_post(glyphs: &[GlyphEntry]) -> Post {
    let names: Vec<&str> = glyphs.iter().map(|g| g.name.as_str()).collect();
    let mut post = Post::new_v2(names);
    post.underline_position = FWord::new(-100);
    post.underline_thickness = FWord::new(50);
    post
}

/// Windows/Unicode BMP name records for the family.
fn build_name(font_name: &str) -> Name {
    let postscript: String = font_name.chars().filter(char::is_ascii_alphanumeric).collect();
    let entries = [
        (1, font_name.to_string()),
        (2, "Regular".to_string()),
        (3, format!("iconfont:{postscript}")),
        (4, font_name.to_string()),
        (5, "Version 1.0".to_string()),
        (6, postscript),
    ];

    let records = entries
        .into_iter()
        .map(|(id, value)| NameRecord::new(3, 1, 0x409, NameId::new(id), value.into()))
        .collect::<Vec<_>>();
    Name::new(records)
}

fn clamp_i16(value: i32) -> i16 {
    value.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}

fn clamp_u16(value: usize) -> u16 {
    value.min(usize::from(u16::MAX)) as u16
}
