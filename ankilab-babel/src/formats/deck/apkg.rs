//! `.apkg` writer
//!
//!     An `.apkg` is a zip archive with two entries:
//!
//!     - `collection.anki2`: a SQLite collection in the schema-11 layout. The `col` row carries
//!       the note type and the deck as JSON; each note gets one row in `notes` and one new card
//!       in `cards`.
//!     - `media`: the media manifest, always `{}` here.
//!
//!     Note and card ids are derived from the export time, so each export gets fresh ids while
//!     the GUIDs stay stable and Anki updates notes it has seen before.
//!
//!     SQLite needs a real file, so the collection is built in a scratch directory and read
//!     back before zipping.

use super::{DeckOptions, DeckPackage, NoteModel};
use crate::error::FormatError;
use crate::format::Format;
use ankilab_parser::Card;
use rusqlite::{params, Connection};
use serde_json::{json, Map, Value};
use sha1::{Digest, Sha1};
use std::io::{Cursor, Write};
use std::time::{SystemTime, UNIX_EPOCH};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const COLLECTION_ENTRY: &str = "collection.anki2";
pub const MEDIA_ENTRY: &str = "media";

/// Separator between field values in `notes.flds`
pub const FIELD_SEPARATOR: &str = "\x1f";

const SCHEMA: &str = "
CREATE TABLE col (
    id              integer primary key,
    crt             integer not null,
    mod             integer not null,
    scm             integer not null,
    ver             integer not null,
    dty             integer not null,
    usn             integer not null,
    ls              integer not null,
    conf            text not null,
    models          text not null,
    decks           text not null,
    dconf           text not null,
    tags            text not null
);
CREATE TABLE notes (
    id              integer primary key,
    guid            text not null,
    mid             integer not null,
    mod             integer not null,
    usn             integer not null,
    tags            text not null,
    flds            text not null,
    sfld            integer not null,
    csum            integer not null,
    flags           integer not null,
    data            text not null
);
CREATE TABLE cards (
    id              integer primary key,
    nid             integer not null,
    did             integer not null,
    ord             integer not null,
    mod             integer not null,
    usn             integer not null,
    type            integer not null,
    queue           integer not null,
    due             integer not null,
    ivl             integer not null,
    factor          integer not null,
    reps            integer not null,
    lapses          integer not null,
    left            integer not null,
    odue            integer not null,
    odid            integer not null,
    flags           integer not null,
    data            text not null
);
CREATE TABLE revlog (
    id              integer primary key,
    cid             integer not null,
    usn             integer not null,
    ease            integer not null,
    ivl             integer not null,
    lastIvl         integer not null,
    factor          integer not null,
    time            integer not null,
    type            integer not null
);
CREATE TABLE graves (
    usn             integer not null,
    oid             integer not null,
    type            integer not null
);
CREATE INDEX ix_notes_usn on notes (usn);
CREATE INDEX ix_cards_usn on cards (usn);
CREATE INDEX ix_revlog_usn on revlog (usn);
CREATE INDEX ix_cards_nid on cards (nid);
CREATE INDEX ix_cards_sched on cards (did, queue, due);
CREATE INDEX ix_revlog_cid on revlog (cid);
CREATE INDEX ix_notes_csum on notes (csum);
";

fn serialization_error(e: impl std::fmt::Display) -> FormatError {
    FormatError::SerializationError(e.to_string())
}

fn sql_id(id: u64) -> Result<i64, FormatError> {
    i64::try_from(id).map_err(serialization_error)
}

/// Anki's duplicate-check hash: the first 4 bytes of the SHA-1 of the sort field.
pub fn field_checksum(field: &str) -> i64 {
    Sha1::digest(field.as_bytes())
        .iter()
        .take(4)
        .fold(0i64, |acc, b| (acc << 8) | i64::from(*b))
}

/// Render `package` as the bytes of an `.apkg` file.
pub fn write_package(package: &DeckPackage) -> Result<Vec<u8>, FormatError> {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(serialization_error)?
        .as_millis();
    let now_ms = i64::try_from(now_ms).map_err(serialization_error)?;

    let scratch = tempfile::tempdir().map_err(serialization_error)?;
    let path = scratch.path().join(COLLECTION_ENTRY);
    {
        let mut conn = Connection::open(&path).map_err(serialization_error)?;
        write_collection(&mut conn, package, now_ms)?;
    }
    let collection = std::fs::read(&path).map_err(serialization_error)?;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(COLLECTION_ENTRY, options)
        .map_err(serialization_error)?;
    zip.write_all(&collection).map_err(serialization_error)?;
    zip.start_file(MEDIA_ENTRY, options)
        .map_err(serialization_error)?;
    zip.write_all(b"{}").map_err(serialization_error)?;
    let archive = zip.finish().map_err(serialization_error)?;

    tracing::debug!(
        notes = package.notes.len(),
        bytes = archive.get_ref().len(),
        "wrote deck package"
    );
    Ok(archive.into_inner())
}

fn write_collection(
    conn: &mut Connection,
    package: &DeckPackage,
    now_ms: i64,
) -> Result<(), FormatError> {
    let now = now_ms / 1000;
    let model_id = sql_id(package.model.id)?;
    let deck_id = sql_id(package.deck.id)?;

    let tx = conn.transaction().map_err(serialization_error)?;
    tx.execute_batch(SCHEMA).map_err(serialization_error)?;
    tx.execute(
        "INSERT INTO col VALUES (1, ?1, ?2, ?2, 11, 0, 0, 0, ?3, ?4, ?5, ?6, '{}')",
        params![
            now,
            now_ms,
            collection_conf(model_id, deck_id).to_string(),
            models_json(&package.model, deck_id, now).to_string(),
            decks_json(deck_id, &package.deck.name, now).to_string(),
            deck_conf().to_string(),
        ],
    )
    .map_err(serialization_error)?;

    {
        let mut insert_note = tx
            .prepare("INSERT INTO notes VALUES (?1, ?2, ?3, ?4, -1, '', ?5, ?6, ?7, 0, '')")
            .map_err(serialization_error)?;
        let mut insert_card = tx
            .prepare(
                "INSERT INTO cards VALUES (?1, ?2, ?3, 0, ?4, -1, 0, 0, ?5, 0, 0, 0, 0, 0, 0, 0, 0, '')",
            )
            .map_err(serialization_error)?;

        for (position, note) in (0i64..).zip(&package.notes) {
            let note_id = now_ms + 2 * position;
            let sort_field = note.fields.first().map(String::as_str).unwrap_or_default();
            insert_note
                .execute(params![
                    note_id,
                    note.guid,
                    model_id,
                    now,
                    note.fields.join(FIELD_SEPARATOR),
                    sort_field,
                    field_checksum(sort_field),
                ])
                .map_err(serialization_error)?;
            insert_card
                .execute(params![note_id + 1, note_id, deck_id, now, position + 1])
                .map_err(serialization_error)?;
        }
    }

    tx.commit().map_err(serialization_error)
}

fn collection_conf(model_id: i64, deck_id: i64) -> Value {
    json!({
        "activeDecks": [deck_id],
        "addToCur": true,
        "collapseTime": 1200,
        "curDeck": deck_id,
        "curModel": model_id.to_string(),
        "dueCounts": true,
        "estTimes": true,
        "newBury": true,
        "newSpread": 0,
        "nextPos": 1,
        "sortBackwards": false,
        "sortType": "noteFld",
        "timeLim": 0
    })
}

fn models_json(model: &NoteModel, deck_id: i64, now: i64) -> Value {
    let fields: Vec<Value> = model
        .fields
        .iter()
        .enumerate()
        .map(|(ord, name)| {
            json!({
                "name": name,
                "ord": ord,
                "font": "Liberation Sans",
                "media": [],
                "rtl": false,
                "size": 20,
                "sticky": false
            })
        })
        .collect();
    let templates: Vec<Value> = model
        .templates
        .iter()
        .enumerate()
        .map(|(ord, template)| {
            json!({
                "name": template.name,
                "ord": ord,
                "qfmt": template.qfmt,
                "afmt": template.afmt,
                "bqfmt": "",
                "bafmt": "",
                "did": null
            })
        })
        .collect();

    let entry = json!({
        "id": model.id.to_string(),
        "name": model.name,
        "type": 0,
        "mod": now,
        "usn": -1,
        "sortf": 0,
        "did": deck_id,
        "tmpls": templates,
        "flds": fields,
        "css": model.css,
        "latexPre": "\\documentclass[12pt]{article}\n\\special{papersize=3in,5in}\n\\usepackage{amssymb,amsmath}\n\\pagestyle{empty}\n\\setlength{\\parindent}{0in}\n\\begin{document}\n",
        "latexPost": "\\end{document}",
        "latexsvg": false,
        "req": [[0, "any", [0]]],
        "tags": [],
        "vers": []
    });

    let mut models = Map::new();
    models.insert(model.id.to_string(), entry);
    Value::Object(models)
}

fn deck_entry(id: i64, name: &str, now: i64) -> Value {
    json!({
        "id": id,
        "name": name,
        "desc": "",
        "collapsed": false,
        "conf": 1,
        "dyn": 0,
        "extendNew": 10,
        "extendRev": 50,
        "mod": now,
        "usn": -1,
        "lrnToday": [0, 0],
        "newToday": [0, 0],
        "revToday": [0, 0],
        "timeToday": [0, 0]
    })
}

/// The exported deck next to the `Default` deck every collection has.
fn decks_json(deck_id: i64, name: &str, now: i64) -> Value {
    let mut decks = Map::new();
    decks.insert("1".to_string(), deck_entry(1, "Default", now));
    decks.insert(deck_id.to_string(), deck_entry(deck_id, name, now));
    Value::Object(decks)
}

fn deck_conf() -> Value {
    json!({
        "1": {
            "id": 1,
            "name": "Default",
            "autoplay": true,
            "maxTaken": 60,
            "mod": 0,
            "replayq": true,
            "timer": 0,
            "usn": 0,
            "new": {
                "bury": true,
                "delays": [1, 10],
                "initialFactor": 2500,
                "ints": [1, 4, 7],
                "order": 1,
                "perDay": 20,
                "separate": true
            },
            "lapse": {
                "delays": [10],
                "leechAction": 0,
                "leechFails": 8,
                "minInt": 1,
                "mult": 0
            },
            "rev": {
                "bury": true,
                "ease4": 1.3,
                "fuzz": 0.05,
                "ivlFct": 1,
                "maxIvl": 36500,
                "minSpace": 1,
                "perDay": 100
            }
        }
    })
}

/// Writes the `.apkg` file Anki imports
pub struct ApkgFormat {
    options: DeckOptions,
}

impl ApkgFormat {
    pub fn new(options: DeckOptions) -> Self {
        Self { options }
    }
}

impl Default for ApkgFormat {
    fn default() -> Self {
        Self::new(DeckOptions::default())
    }
}

impl Format for ApkgFormat {
    fn name(&self) -> &str {
        "deck"
    }

    fn description(&self) -> &str {
        "Anki package (.apkg), one two-field note per card"
    }

    fn file_extensions(&self) -> &[&str] {
        &["apkg"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn is_binary(&self) -> bool {
        true
    }

    fn serialize(&self, _cards: &[Card]) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' writes a binary package, not text",
            self.name()
        )))
    }

    fn serialize_bytes(&self, cards: &[Card]) -> Result<Vec<u8>, FormatError> {
        write_package(&DeckPackage::build(cards, &self.options))
    }
}
